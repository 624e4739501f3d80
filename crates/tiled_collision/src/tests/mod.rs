//! Cross-module scenarios: map export in, directional flags out

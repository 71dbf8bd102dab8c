pub(crate) const DEFAULT_USER_AGENT: &str = concat!("rlprobe/", env!("CARGO_PKG_VERSION"));

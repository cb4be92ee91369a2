/// Version of gen, overridable at compile time through `GEN_VERSION`
pub const VERSION: &str = match option_env!("GEN_VERSION") {
    Some(version) => version,
    None => env!("CARGO_PKG_VERSION"),
};

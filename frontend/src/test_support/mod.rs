pub mod fixtures;
#[cfg(not(target_arch = "wasm32"))]
pub mod ssr;

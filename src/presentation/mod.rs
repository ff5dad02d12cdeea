pub mod animation_loop;
pub mod wasm_api;

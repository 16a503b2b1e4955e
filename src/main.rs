mod telemetry;

// Page behaviour, driven by `frontend` in the browser and by unit tests
// natively.
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
mod carousel;
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
mod contact;
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
mod lazy;
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
mod menu;
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
mod notify;
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
mod reveal;
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
mod scroll;
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
mod typing;

#[cfg(target_arch = "wasm32")]
mod frontend;

#[cfg(not(target_arch = "wasm32"))]
mod server;

#[cfg(not(target_arch = "wasm32"))]
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    server::run().await
}

#[cfg(target_arch = "wasm32")]
fn main() {
    frontend::run();
}

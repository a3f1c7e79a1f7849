use job_portal_pwa::components::AuthPage;

fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("🚀 Job Portal starting...");

    yew::Renderer::<AuthPage>::new().render();
}

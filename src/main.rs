use coin_table::app::App;

fn main() {
    coin_table::logging::init_logger();

    #[cfg(feature = "desktop")]
    launch_desktop();

    #[cfg(not(feature = "desktop"))]
    dioxus::launch(App);
}

#[cfg(feature = "desktop")]
fn launch_desktop() {
    use coin_table::platform::desktop::paths::default_webview_data_dir;

    let mut config = dioxus::desktop::Config::new()
        .with_window(dioxus::desktop::WindowBuilder::new().with_title("Crypto Tracker"));
    match default_webview_data_dir() {
        Ok(dir) => config = config.with_data_directory(dir),
        Err(err) => {
            let message = format!("{err:#}");
            tracing::warn!(error = %message, "using default webview data dir");
        }
    }

    dioxus::LaunchBuilder::desktop().with_cfg(config).launch(App);
}

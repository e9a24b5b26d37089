use calendar_event_sender::logger::init_logger;
use calendar_event_sender::ui::app::SenderApp;
use calendar_event_sender::ui::settings_io::AppPaths;
use eframe::egui;

fn main() -> eframe::Result<()> {
    let paths = AppPaths::default_location();
    init_logger(&paths.log_file);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([900.0, 650.0])
            .with_min_inner_size([800.0, 600.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Calendar Event Sender",
        options,
        Box::new(move |_cc| {
            let app = SenderApp::new(paths)?;
            Ok(Box::new(app))
        }),
    )
}

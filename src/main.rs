//! Investment Tracker Dashboard
//!
//! A GUI shell around the investment-tracker presentation layer.

use eframe::egui;
use std::sync::{Arc, Mutex};

use investview::app::{App, AppWrapper};

fn main() -> anyhow::Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 760.0])
            .with_min_inner_size([800.0, 600.0])
            .with_title("Investment Tracker"),
        ..Default::default()
    };

    let app: Arc<Mutex<App>> = Arc::new(Mutex::new(App::default()));
    eframe::run_native(
        "Investment Tracker",
        options,
        Box::new(move |cc| {
            // Configure default fonts and style
            let fonts = egui::FontDefinitions::default();
            cc.egui_ctx.set_fonts(fonts);

            Ok(Box::new(AppWrapper { app }) as Box<dyn eframe::App>)
        }),
    )
    .map_err(|e| anyhow::anyhow!("error running application: {e}"))?;

    Ok(())
}

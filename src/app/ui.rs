use egui::Context;
use image::ImageReader;

use super::state::{App, ALLOCATION_CHART_ID, DELETE_FORM_ID, PERFORMANCE_CHART_ID, VALUE_CHART_ID};
use crate::view::{confirm_delete, ConfirmPrompt, PERFORMANCE_NEGATIVE_CLASS, PERFORMANCE_POSITIVE_CLASS};

/// The demo shell has no native modal; the button press itself is the consent.
struct AlwaysConfirm;

impl ConfirmPrompt for AlwaysConfirm {
    fn confirm(&self, _message: &str) -> bool {
        true
    }
}

/// Draw the dashboard UI
pub fn draw_ui(app: &mut App, ctx: &Context) {
    egui::SidePanel::left("side_panel").show(ctx, |ui| {
        ui.heading("Impostazioni");
        ui.separator();

        let mut dark = app.page.dark_mode;
        if ui.checkbox(&mut dark, "Tema scuro").changed() {
            app.page.dark_mode = dark;
            app.on_theme_toggled();
        }

        ui.separator();
        if ui.button("Elimina portafoglio").clicked() {
            confirm_delete(&AlwaysConfirm, &mut app.page, None, DELETE_FORM_ID);
        }
        if app
            .page
            .forms
            .iter()
            .any(|f| f.id == DELETE_FORM_ID && f.submitted)
        {
            ui.label("Richiesta di eliminazione inviata.");
        }
    });

    egui::CentralPanel::default().show(ctx, |ui| {
        ui.heading("Il mio portafoglio");
        ui.separator();

        for element in &app.page.elements {
            let mut text =
                egui::RichText::new(format!("{}: {}", tile_title(&element.id), element.text));
            if element.has_class(PERFORMANCE_POSITIVE_CLASS) {
                text = text.color(egui::Color32::from_rgb(0x2e, 0xcc, 0x71));
            } else if element.has_class(PERFORMANCE_NEGATIVE_CLASS) {
                text = text.color(egui::Color32::from_rgb(0xe7, 0x4c, 0x3c));
            }
            ui.label(text);
        }

        ui.separator();
        egui::ScrollArea::vertical().show(ui, |ui| {
            for id in [VALUE_CHART_ID, ALLOCATION_CHART_ID, PERFORMANCE_CHART_ID] {
                ui.label(chart_title(id));
                if let Some(texture) = app.chart_textures.get(id) {
                    let responsive = app
                        .registry
                        .get_element(id)
                        .map(|chart| chart.options.responsive)
                        .unwrap_or(false);
                    if responsive {
                        // Fill the container width
                        let width = ui.available_width();
                        ui.add(
                            egui::Image::new(texture)
                                .fit_to_exact_size(egui::vec2(width, width * 0.55)),
                        );
                    } else {
                        ui.image(texture);
                    }
                }
                ui.separator();
            }
        });
    });

    app.process_events();

    // Re-render plots if needed
    if app.update_needed {
        if let Err(e) = app.registry.render_all() {
            eprintln!("Chart render error: {}", e);
        } else {
            load_chart_textures(app, ctx);
        }
        app.update_needed = false;
    }
}

fn tile_title(id: &str) -> &str {
    match id {
        "totalValue" => "Valore totale",
        "overallPerformance" => "Rendimento complessivo",
        "dailyPerformance" => "Variazione giornaliera",
        "lastUpdate" => "Ultimo aggiornamento",
        _ => id,
    }
}

fn chart_title(id: &str) -> &str {
    match id {
        VALUE_CHART_ID => "Andamento del portafoglio",
        ALLOCATION_CHART_ID => "Allocazione",
        PERFORMANCE_CHART_ID => "Rendimento per asset",
        _ => id,
    }
}

fn load_chart_textures(app: &mut App, ctx: &Context) {
    let mut loaded = Vec::new();
    for (id, chart) in app.registry.iter() {
        match ImageReader::open(&chart.plot_path).and_then(|reader| {
            reader
                .decode()
                .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))
        }) {
            Ok(image) => {
                let size = [image.width() as usize, image.height() as usize];
                let pixels = image.to_rgba8();
                let pixels = pixels.as_flat_samples();
                let texture = ctx.load_texture(
                    id.clone(),
                    egui::ColorImage::from_rgba_unmultiplied(size, pixels.as_slice()),
                    egui::TextureOptions::LINEAR,
                );
                loaded.push((id.clone(), texture));
            }
            Err(_) => eprintln!("Failed to load chart image for {}", id),
        }
    }
    for (id, texture) in loaded {
        app.chart_textures.insert(id, texture);
    }
}

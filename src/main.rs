// src/main.rs
//
// Calculatrice de fractions : fenêtre egui, en natif ou dans un <canvas> (wasm32).
// Les frontaux terminal vivent dans src/bin/ (interactif, rapide).

#![cfg_attr(target_arch = "wasm32", allow(unused_imports))]

use eframe::egui;

mod app;

use app::AppCalc;

const TITRE_APP: &str = "Calculatrice de fractions";

#[cfg(not(target_arch = "wasm32"))]
fn main() -> eframe::Result<()> {
    // RUST_LOG=debug pour suivre chaque commande évaluée
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(TITRE_APP)
            .with_inner_size([480.0, 720.0])
            .with_min_inner_size([400.0, 600.0]),
        ..Default::default()
    };

    eframe::run_native(
        TITRE_APP,
        options,
        Box::new(|_cc| Ok(Box::<AppCalc>::default())),
    )
}

#[cfg(target_arch = "wasm32")]
fn main() {}

#[cfg(target_arch = "wasm32")]
mod web {
    use wasm_bindgen::prelude::wasm_bindgen;
    use wasm_bindgen::{JsCast, JsValue};
    use web_sys::HtmlCanvasElement;

    use super::{AppCalc, TITRE_APP};

    /// index.html : <canvas id="calc_canvas"></canvas>
    const CANVAS_ID: &str = "calc_canvas";

    fn canvas_cible() -> Result<HtmlCanvasElement, JsValue> {
        let doc = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| JsValue::from_str("pas de document"))?;
        doc.set_title(TITRE_APP);
        doc.get_element_by_id(CANVAS_ID)
            .ok_or_else(|| JsValue::from_str(&format!("#{CANVAS_ID} absent")))?
            .dyn_into()
            .map_err(|_| JsValue::from_str(&format!("#{CANVAS_ID} n’est pas un canvas")))
    }

    #[wasm_bindgen(start)]
    pub async fn start() -> Result<(), JsValue> {
        let canvas = canvas_cible()?;
        eframe::WebRunner::new()
            .start(
                canvas,
                eframe::WebOptions::default(),
                Box::new(|_cc| Ok(Box::<AppCalc>::default())),
            )
            .await
    }
}

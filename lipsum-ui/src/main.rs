use std::env;
use std::time::Duration;

use eframe::{egui, Frame};
use egui::Context;

use reqwest::blocking::Client;
use reqwest::Result;

/// Units offered by the UI, mirrored from the server's `units` parameter.
#[derive(Debug, Clone, Copy, PartialEq)]
enum UnitsMode {
    Words,
    Sentences,
    Paragraphs,
}

impl UnitsMode {
    fn as_query(self) -> &'static str {
        match self {
            UnitsMode::Words => "words",
            UnitsMode::Sentences => "sentences",
            UnitsMode::Paragraphs => "paragraphs",
        }
    }
}

/// REST context holding a reusable blocking HTTP client.
struct RESTContext {
    client: Client,
    base_url: String,
}

impl RESTContext {
    /// Creates a new REST context with a timeout.
    ///
    /// The server address comes from `LIPSUM_URL`, default `http://127.0.0.1:5000`.
    fn new() -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::new(5, 0))
            .build()?;
        let base_url = env::var("LIPSUM_URL").unwrap_or_else(|_| "http://127.0.0.1:5000".to_owned());
        Ok(Self { client, base_url })
    }

    /// Sends a GET request to `/v1/generate` with query parameters.
    fn get_generated(&self, params: &[(String, String)]) -> Result<String> {
        let response = self.client
            .get(format!("{}/v1/generate", self.base_url))
            .query(params)
            .send()?
            .error_for_status()?;

        response.text()
    }

    /// Sends a GET request to `/v1/vocabularies`.
    fn get_vocabularies(&self) -> Result<String> {
        let response = self.client
            .get(format!("{}/v1/vocabularies", self.base_url))
            .send()?
            .error_for_status()?;

        response.text()
    }
}

/// Global UI state (MUST persist between frames in egui).
struct GeneratorUI {
    rest: RESTContext,
    last_text: Option<String>,

    vocabulary: String,
    available_vocabularies: Vec<String>,

    units: UnitsMode,
    use_count: bool,
    count: usize,
    html: bool,

    use_seed: bool,
    seed: String,

    words_min: usize,
    words_max: usize,
    sentences_min: usize,
    sentences_max: usize,
}

impl GeneratorUI {
    /// Initializes the UI with the generator defaults.
    fn new() -> Result<Self> {
        let mut generator = Self {
            rest: RESTContext::new()?,
            last_text: None,

            vocabulary: "default".to_owned(),
            available_vocabularies: Vec::new(),

            units: UnitsMode::Paragraphs,
            use_count: true,
            count: 1,
            html: false,

            use_seed: false,
            seed: String::new(),

            words_min: 5,
            words_max: 15,
            sentences_min: 3,
            sentences_max: 7,
        };
        generator.get_vocabularies();
        Ok(generator)
    }

    /// Builds the query parameters for the API.
    ///
    /// - `count` is only sent when the checkbox is enabled
    /// - `seed` is only sent when enabled and non-empty
    fn build_query(&self) -> Vec<(String, String)> {
        let mut params = vec![
            ("units".to_owned(), self.units.as_query().to_owned()),
            ("format".to_owned(), if self.html { "html" } else { "plain" }.to_owned()),
            ("vocabulary".to_owned(), self.vocabulary.clone()),
            ("words_min".to_owned(), self.words_min.to_string()),
            ("words_max".to_owned(), self.words_max.to_string()),
            ("sentences_min".to_owned(), self.sentences_min.to_string()),
            ("sentences_max".to_owned(), self.sentences_max.to_string()),
            ("suffix".to_owned(), "\n\n".to_owned()),
        ];

        if self.use_count {
            params.push(("count".to_owned(), self.count.to_string()));
        }
        if self.use_seed && !self.seed.is_empty() {
            params.push(("seed".to_owned(), self.seed.clone()));
        }

        params
    }

    /// Performs the generation request.
    fn get_generated(&mut self) {
        let params = self.build_query();
        match self.rest.get_generated(&params) {
            Ok(text) => self.last_text = Some(text),
            Err(e) => {
                log::warn!("Generation failed: {e}");
                self.last_text = Some(format!("Error: {e}"))
            }
        }
    }

    /// Performs the vocabularies request.
    fn get_vocabularies(&mut self) {
        match self.rest.get_vocabularies() {
            Ok(names) => {
                self.available_vocabularies = names
                    .lines()
                    .map(|s| s.trim().to_owned())
                    .filter(|s| !s.is_empty())
                    .collect()
            }
            Err(e) => self.last_text = Some(format!("Error: {e}")),
        }
    }
}

impl eframe::App for GeneratorUI {
    /// UI update loop (called every frame).
    fn update(&mut self, ctx: &Context, _: &mut Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {

            egui::Grid::new("generator_grid")
                .num_columns(2)
                .spacing([20.0, 6.0])
                .striped(true)
                .show(ui, |ui| {

                    // units
                    ui.label("Units");
                    ui.horizontal(|ui| {
                        ui.radio_value(&mut self.units, UnitsMode::Words, "Words");
                        ui.radio_value(&mut self.units, UnitsMode::Sentences, "Sentences");
                        ui.radio_value(&mut self.units, UnitsMode::Paragraphs, "Paragraphs");
                    });
                    ui.end_row();

                    // count checkbox + value
                    ui.checkbox(&mut self.use_count, "Fixed count");
                    if self.use_count {
                        ui.add(egui::DragValue::new(&mut self.count).range(0..=100).speed(1));
                    } else {
                        ui.label("Random count within bounds");
                    }
                    ui.end_row();

                    // bounds, kept ordered so the server never rejects them
                    ui.label("Words per sentence");
                    ui.horizontal(|ui| {
                        ui.add(egui::DragValue::new(&mut self.words_min).range(1..=self.words_max));
                        ui.add(egui::DragValue::new(&mut self.words_max).range(self.words_min..=50));
                    });
                    ui.end_row();

                    ui.label("Sentences per paragraph");
                    ui.horizontal(|ui| {
                        ui.add(egui::DragValue::new(&mut self.sentences_min).range(1..=self.sentences_max));
                        ui.add(egui::DragValue::new(&mut self.sentences_max).range(self.sentences_min..=30));
                    });
                    ui.end_row();

                    ui.label("HTML output");
                    ui.checkbox(&mut self.html, "");
                    ui.end_row();

                    ui.separator();
                    ui.end_row();

                    // seed
                    ui.checkbox(&mut self.use_seed, "Seed");
                    if self.use_seed {
                        ui.text_edit_singleline(&mut self.seed);
                    } else {
                        ui.label("Different text every time");
                    }
                    ui.end_row();

                    // vocabulary
                    ui.label("Vocabulary");
                    egui::ComboBox::from_id_salt("vocabulary")
                        .selected_text(&self.vocabulary)
                        .show_ui(ui, |ui| {
                            for name in &self.available_vocabularies {
                                ui.selectable_value(&mut self.vocabulary, name.clone(), name);
                            }
                        });
                    ui.end_row();

                    ui.separator();
                    ui.end_row();

                    // Generate button
                    if ui
                        .add_sized([200.0, 40.0], egui::Button::new("Generate"))
                        .clicked()
                    {
                        self.get_generated();
                    }
                    if ui.button("Refresh vocabularies").clicked() {
                        self.get_vocabularies();
                    }
                    ui.end_row();
                });

            ui.separator();

            // Output
            egui::ScrollArea::vertical().show(ui, |ui| {
                match &self.last_text {
                    Some(text) => {
                        ui.add(egui::Label::new(text.as_str()).wrap());
                    }
                    None => {
                        ui.label("Click Generate to start");
                    }
                }
            });
        });
    }
}

/// Application entry point.
fn main() -> eframe::Result {
    env_logger::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([520.0, 560.0])
            .with_resizable(true),
        ..Default::default()
    };

    eframe::run_native(
        "lipsum",
        options,
        Box::new(|_| Ok(Box::new(GeneratorUI::new()?))),
    )
}

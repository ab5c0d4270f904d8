use std::collections::HashMap;
use std::env;
use std::path::PathBuf;
use std::sync::Mutex;

use actix_cors::Cors;
use actix_web::{get, middleware, web, App, HttpResponse, HttpServer, Responder};

use serde::Deserialize;
use lipsum_core::io::{get_filename, list_files, normalize_folder};
use lipsum_core::{Bounds, Format, GeneratorOptions, LipsumError, LoremIpsum, Units, Vocabulary};

/// Largest `count` accepted by `/v1/generate`.
const MAX_COUNT: usize = 1_000;

/// Largest `words_max` accepted by `/v1/generate`.
const MAX_WORDS_PER_SENTENCE: usize = 100;

/// Largest `sentences_max` accepted by `/v1/generate`.
const MAX_SENTENCES_PER_PARAGRAPH: usize = 50;

/// Name of the built-in vocabulary.
const DEFAULT_VOCABULARY: &str = "default";

/// Struct representing query parameters for the `/v1/generate` endpoint
#[derive(Deserialize)]
struct GenerateParams {
	count: Option<usize>,
	units: Option<String>, // words | sentences | paragraphs, singular accepted
	format: Option<String>, // plain | html
	seed: Option<String>,
	vocabulary: Option<String>,
	words_min: Option<usize>,
	words_max: Option<usize>,
	sentences_min: Option<usize>,
	sentences_max: Option<usize>,
	suffix: Option<String>,
}

impl GenerateParams {
	fn units(&self) -> Result<Units, LipsumError> {
		self.units.as_deref().map_or(Ok(Units::default()), |s| s.parse())
	}

	fn format(&self) -> Result<Format, LipsumError> {
		self.format.as_deref().map_or(Ok(Format::default()), |s| s.parse())
	}

	fn count(&self) -> Result<Option<usize>, String> {
		match self.count {
			Some(count) if count > MAX_COUNT => Err(format!("count cannot exceed {MAX_COUNT}")),
			count => Ok(count),
		}
	}

	/// Builds generator options, bounds falling back to the defaults.
	///
	/// # Errors
	/// Returns a message for inverted bounds or bounds above the server limits.
	fn generator_options(&self, words: Vocabulary) -> Result<GeneratorOptions, String> {
		let sentences_per_paragraph = Self::bounds(
			"sentences per paragraph",
			self.sentences_min,
			self.sentences_max,
			Bounds::SENTENCES_PER_PARAGRAPH,
			MAX_SENTENCES_PER_PARAGRAPH,
		)?;
		let words_per_sentence = Self::bounds(
			"words per sentence",
			self.words_min,
			self.words_max,
			Bounds::WORDS_PER_SENTENCE,
			MAX_WORDS_PER_SENTENCE,
		)?;

		Ok(GeneratorOptions {
			sentences_per_paragraph,
			words_per_sentence,
			random: None,
			seed: self.seed.clone(),
			words: Some(words),
		})
	}

	fn bounds(
		label: &'static str,
		min: Option<usize>,
		max: Option<usize>,
		default: Bounds,
		limit: usize,
	) -> Result<Bounds, String> {
		let bounds = Bounds::new(label, min.unwrap_or(default.min), max.unwrap_or(default.max))
			.map_err(|e| e.to_string())?;
		if bounds.max > limit {
			return Err(format!("Maximum number of {label} cannot exceed {limit}"));
		}
		Ok(bounds)
	}
}

/// Server settings, read from the environment.
///
/// - `LIPSUM_BIND`: listen address, default `127.0.0.1:5000`
/// - `LIPSUM_DATA_DIR`: folder holding `.dat` word lists, default `./data`
struct ServerConfig {
	bind: String,
	data_dir: PathBuf,
}

impl ServerConfig {
	fn from_env() -> Self {
		let bind = env::var("LIPSUM_BIND").unwrap_or_else(|_| "127.0.0.1:5000".to_owned());
		let data_dir = env::var("LIPSUM_DATA_DIR").unwrap_or_else(|_| "./data".to_owned());
		Self { bind, data_dir: normalize_folder(&data_dir) }
	}
}

/// Failure while resolving a vocabulary by name.
enum VocabularyError {
	Unknown(String),
	Io(std::io::Error),
}

struct SharedData {
	data_dir: PathBuf,
	vocabularies: HashMap<String, Vocabulary>,
}

impl SharedData {
	fn new(data_dir: PathBuf) -> Self {
		Self { data_dir, vocabularies: HashMap::new() }
	}

	/// Returns the named vocabulary, loading `<data_dir>/<name>.dat` on first use.
	///
	/// Names are restricted to `[A-Za-z0-9_-]` so they cannot leave the data folder.
	fn vocabulary(&mut self, name: &str) -> Result<Vocabulary, VocabularyError> {
		if name == DEFAULT_VOCABULARY {
			return Ok(Vocabulary::default());
		}
		if let Some(vocabulary) = self.vocabularies.get(name) {
			return Ok(vocabulary.clone());
		}

		let valid = !name.is_empty() && name.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
		let path = self.data_dir.join(format!("{name}.dat"));
		if !valid || !path.is_file() {
			return Err(VocabularyError::Unknown(name.to_owned()));
		}

		let vocabulary = Vocabulary::from_file(&path).map_err(VocabularyError::Io)?;
		log::info!("Loaded vocabulary '{}' ({} words)", name, vocabulary.len());
		self.vocabularies.insert(name.to_owned(), vocabulary.clone());
		Ok(vocabulary)
	}
}

/// HTTP GET endpoint `/v1/generate`
///
/// Generates placeholder text from the query parameters and returns it as
/// the response body. A new generator is built per request, so a `seed`
/// always reproduces the same text.
#[get("/v1/generate")]
async fn get_generated(data: web::Data<Mutex<SharedData>>, query: web::Query<GenerateParams>) -> impl Responder {
	let units = match query.units() {
		Ok(u) => u,
		Err(e) => return HttpResponse::BadRequest().body(e.to_string())
	};
	let format = match query.format() {
		Ok(f) => f,
		Err(e) => return HttpResponse::BadRequest().body(e.to_string())
	};
	let count = match query.count() {
		Ok(c) => c,
		Err(e) => return HttpResponse::BadRequest().body(e)
	};

	let vocabulary = {
		let mut shared_data = match data.lock() {
			Ok(m) => m,
			Err(_) => return HttpResponse::InternalServerError().body("Vocabulary lock failed"),
		};
		match shared_data.vocabulary(query.vocabulary.as_deref().unwrap_or(DEFAULT_VOCABULARY)) {
			Ok(v) => v,
			Err(VocabularyError::Unknown(name)) => {
				return HttpResponse::BadRequest().body(format!("Unknown vocabulary '{name}'"))
			}
			Err(VocabularyError::Io(e)) => {
				log::error!("Failed to load vocabulary: {e}");
				return HttpResponse::InternalServerError().body(format!("Failed to load vocabulary: {e}"))
			}
		}
	};

	let options = match query.generator_options(vocabulary) {
		Ok(o) => o,
		Err(e) => return HttpResponse::BadRequest().body(e)
	};

	let mut lorem = match LoremIpsum::with_options(options, format, query.suffix.clone()) {
		Ok(l) => l,
		Err(e) => return HttpResponse::BadRequest().body(e.to_string())
	};

	let result = match units {
		Units::Words => lorem.generate_words(count),
		Units::Sentences => lorem.generate_sentences(count),
		Units::Paragraphs => lorem.generate_paragraphs(count.unwrap_or(1)),
	};

	match result {
		Ok(text) => HttpResponse::Ok().content_type(content_type(format)).body(text),
		Err(e @ LipsumError::EmptyVocabulary) => HttpResponse::BadRequest().body(e.to_string()),
		Err(e) => HttpResponse::InternalServerError().body(e.to_string()),
	}
}

fn content_type(format: Format) -> &'static str {
	match format {
		Format::Plain => "text/plain; charset=utf-8",
		Format::Html => "text/html; charset=utf-8",
	}
}

/// HTTP GET endpoint `/v1/vocabularies`
///
/// Lists the built-in vocabulary and every `.dat` file of the data folder,
/// one name per line.
#[get("/v1/vocabularies")]
async fn get_vocabularies(data: web::Data<Mutex<SharedData>>) -> impl Responder {
	let data_dir = match data.lock() {
		Ok(m) => m.data_dir.clone(),
		Err(_) => return HttpResponse::InternalServerError().body("Vocabulary lock failed"),
	};

	let mut names = vec![DEFAULT_VOCABULARY.to_owned()];
	if data_dir.is_dir() {
		let files = match list_files(&data_dir, "dat") {
			Ok(files) => files,
			Err(e) => {
				log::error!("Failed to list vocabularies in {}: {e}", data_dir.display());
				return HttpResponse::InternalServerError().body("Failed to list vocabularies")
			}
		};
		names.extend(files.iter().filter_map(|file| get_filename(file).ok()));
	}

	HttpResponse::Ok().body(names.join("\n"))
}

/// Registers the `/v1` routes.
fn configure(cfg: &mut web::ServiceConfig) {
	cfg.service(get_generated).service(get_vocabularies);
}

/// Main entry point for the server.
///
/// Wraps the vocabulary cache in a `Mutex` for thread safety and starts an
/// Actix-web HTTP server.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
	env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

	let config = ServerConfig::from_env();
	log::info!("Serving vocabularies from {}", config.data_dir.display());

	let shared_data = web::Data::new(Mutex::new(SharedData::new(config.data_dir)));

	log::info!("Listening on {}", config.bind);
	HttpServer::new(move || {
		App::new()
			.wrap(middleware::Logger::default())
			.wrap(Cors::default().allow_any_origin().allowed_methods(vec!["GET"]))
			.app_data(shared_data.clone())
			.configure(configure)
	})
		.bind(config.bind)?
		.run()
		.await
}

#[cfg(test)]
mod tests {
	use super::*;
	use actix_web::http::StatusCode;
	use actix_web::test;

	fn shared(data_dir: PathBuf) -> web::Data<Mutex<SharedData>> {
		web::Data::new(Mutex::new(SharedData::new(data_dir)))
	}

	async fn get(data: web::Data<Mutex<SharedData>>, uri: &str) -> (StatusCode, String) {
		let app = test::init_service(App::new().app_data(data).configure(configure)).await;
		let response = test::call_service(&app, test::TestRequest::get().uri(uri).to_request()).await;
		let status = response.status();
		let body = test::read_body(response).await;
		(status, String::from_utf8_lossy(&body).into_owned())
	}

	#[actix_web::test]
	async fn generate_defaults_to_sentences() {
		let (status, body) = get(shared(PathBuf::from("./missing")), "/v1/generate").await;
		assert_eq!(status, StatusCode::OK);
		assert!(body.ends_with('.'));
		assert!((3..=7).contains(&body.matches('.').count()));
	}

	#[actix_web::test]
	async fn seeded_requests_repeat() {
		let data = shared(PathBuf::from("./missing"));
		let uri = "/v1/generate?units=paragraphs&count=2&seed=abc&suffix=%7C";
		let (_, first) = get(data.clone(), uri).await;
		let (_, second) = get(data, uri).await;
		assert_eq!(first, second);
		assert_eq!(first.split('|').count(), 2);
	}

	#[actix_web::test]
	async fn html_words() {
		let (status, body) = get(shared(PathBuf::from("./missing")), "/v1/generate?units=word&count=3&format=html").await;
		assert_eq!(status, StatusCode::OK);
		assert!(body.starts_with("<p>") && body.ends_with("</p>"));
		assert_eq!(body.split(' ').count(), 3);
	}

	#[actix_web::test]
	async fn bad_requests() {
		let data = shared(PathBuf::from("./missing"));
		for uri in [
			"/v1/generate?units=lines",
			"/v1/generate?format=pdf",
			"/v1/generate?words_min=9&words_max=2",
			"/v1/generate?vocabulary=..%2Fsecret",
			"/v1/generate?vocabulary=absent",
			"/v1/generate?count=100000",
			"/v1/generate?units=words&words_min=2000000&words_max=2000000",
			"/v1/generate?words_max=101",
			"/v1/generate?units=paragraphs&count=1000&sentences_max=100000",
		] {
			let (status, _) = get(data.clone(), uri).await;
			assert_eq!(status, StatusCode::BAD_REQUEST, "{uri}");
		}
	}

	#[actix_web::test]
	async fn bounds_at_the_limits_accepted() {
		let data = shared(PathBuf::from("./missing"));
		let uri = "/v1/generate?units=sentences&count=1&words_min=100&words_max=100&sentences_max=50";
		let (status, body) = get(data, uri).await;
		assert_eq!(status, StatusCode::OK);
		assert_eq!(body.split(' ').count(), MAX_WORDS_PER_SENTENCE);
	}

	#[actix_web::test]
	async fn custom_vocabulary() {
		let dir = tempfile::tempdir().unwrap();
		std::fs::write(dir.path().join("metal.dat"), "ferrum\nplumbum\n").unwrap();
		std::fs::write(dir.path().join("empty.dat"), "\n").unwrap();
		let data = shared(dir.path().to_path_buf());

		let (status, body) = get(data.clone(), "/v1/vocabularies").await;
		assert_eq!(status, StatusCode::OK);
		assert_eq!(body, "default\nempty\nmetal");

		let (status, body) = get(data.clone(), "/v1/generate?units=words&count=8&vocabulary=metal").await;
		assert_eq!(status, StatusCode::OK);
		assert!(body.split(' ').all(|w| w == "ferrum" || w == "plumbum"));

		let (status, _) = get(data, "/v1/generate?vocabulary=empty").await;
		assert_eq!(status, StatusCode::BAD_REQUEST);
	}
}

use std::sync::{Mutex, MutexGuard};

use actix_web::{delete, get, post, put, web, HttpResponse, Responder};
use log::warn;
use serde::Deserialize;

use rs_blank_core::sheet::blank_count::{parse_blank_count, MAX_BLANKS};
use rs_blank_core::{generate_expression, AnswerRow, AnswerSheet, SheetError};

/// Body of the stateless `/v1/generate` endpoint.
#[derive(Deserialize)]
struct GenerateRequest {
	rows: Vec<AnswerRow>,
	total_blanks: i64,
}

/// Query parameters for `/v1/blank_count`.
#[derive(Deserialize)]
struct BlankCountQuery {
	count: Option<String>,
}

/// Sheet shared by every request.
pub struct SharedData {
	pub sheet: AnswerSheet,
}

type Shared = web::Data<Mutex<SharedData>>;

fn lock(data: &Shared) -> Result<MutexGuard<'_, SharedData>, HttpResponse> {
	data.lock()
		.map_err(|_| HttpResponse::InternalServerError().body("Sheet lock failed"))
}

/// Maps a sheet error onto an HTTP response.
fn error_response(error: SheetError) -> HttpResponse {
	warn!("{error}");
	match error {
		SheetError::RowNotFound { .. } => HttpResponse::NotFound().body(error.to_string()),
		_ => HttpResponse::BadRequest().body(error.to_string()),
	}
}

fn sheet_response(sheet: &AnswerSheet) -> HttpResponse {
	HttpResponse::Ok().json(sheet.view())
}

/// HTTP POST endpoint `/v1/generate`
///
/// Generates the expression for the rows in the body without touching the
/// shared sheet. A negative `total_blanks` behaves like 0; more than
/// `MAX_BLANKS` is rejected.
#[post("/v1/generate")]
async fn post_generate(body: web::Json<GenerateRequest>) -> impl Responder {
	let total_blanks = usize::try_from(body.total_blanks).unwrap_or(0);
	if total_blanks > MAX_BLANKS {
		warn!("rejecting total_blanks {}", body.total_blanks);
		return HttpResponse::BadRequest()
			.body(format!("total_blanks must be at most {}, got {}", MAX_BLANKS, body.total_blanks));
	}
	HttpResponse::Ok()
		.content_type("text/plain; charset=utf-8")
		.body(generate_expression(&body.rows, total_blanks))
}

#[get("/v1/sheet")]
async fn get_sheet(data: Shared) -> impl Responder {
	match lock(&data) {
		Ok(shared) => sheet_response(&shared.sheet),
		Err(response) => response,
	}
}

#[get("/v1/expression")]
async fn get_expression(data: Shared) -> impl Responder {
	match lock(&data) {
		Ok(shared) => HttpResponse::Ok()
			.content_type("text/plain; charset=utf-8")
			.body(shared.sheet.expression()),
		Err(response) => response,
	}
}

#[put("/v1/blank_count")]
async fn put_blank_count(data: Shared, query: web::Query<BlankCountQuery>) -> impl Responder {
	let count = match &query.count {
		Some(s) => match parse_blank_count(s) {
			Ok(count) => count,
			Err(e) => return error_response(e),
		},
		None => return HttpResponse::BadRequest().body("Missing blank count"),
	};

	let mut shared = match lock(&data) {
		Ok(shared) => shared,
		Err(response) => return response,
	};
	// Already clamped, fits in i64.
	shared.sheet.set_blank_count(count as i64);
	sheet_response(&shared.sheet)
}

#[post("/v1/rows")]
async fn post_row(data: Shared) -> impl Responder {
	let mut shared = match lock(&data) {
		Ok(shared) => shared,
		Err(response) => return response,
	};
	shared.sheet.add_row();
	sheet_response(&shared.sheet)
}

#[delete("/v1/rows/{id}")]
async fn delete_row(data: Shared, path: web::Path<String>) -> impl Responder {
	let mut shared = match lock(&data) {
		Ok(shared) => shared,
		Err(response) => return response,
	};
	match shared.sheet.remove_row(&path) {
		Ok(_) => sheet_response(&shared.sheet),
		Err(e) => error_response(e),
	}
}

/// HTTP PUT endpoint `/v1/rows/{id}/blanks/{index}`
///
/// The raw request body becomes the blank value, untrimmed.
#[put("/v1/rows/{id}/blanks/{index}")]
async fn put_blank(data: Shared, path: web::Path<(String, usize)>, body: String) -> impl Responder {
	let (id, index) = path.into_inner();
	let mut shared = match lock(&data) {
		Ok(shared) => shared,
		Err(response) => return response,
	};
	match shared.sheet.set_value(&id, index, body) {
		Ok(()) => sheet_response(&shared.sheet),
		Err(e) => error_response(e),
	}
}

#[post("/v1/clear")]
async fn post_clear(data: Shared) -> impl Responder {
	let mut shared = match lock(&data) {
		Ok(shared) => shared,
		Err(response) => return response,
	};
	shared.sheet.clear_values();
	sheet_response(&shared.sheet)
}

/// Registers every endpoint on an app or scope.
pub fn configure(cfg: &mut web::ServiceConfig) {
	cfg.service(post_generate)
		.service(get_sheet)
		.service(get_expression)
		.service(put_blank_count)
		.service(post_row)
		.service(delete_row)
		.service(put_blank)
		.service(post_clear);
}

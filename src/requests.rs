// src/requests.rs
use crate::errors::ServerError;
use astra::Request;
use std::collections::HashMap;
use std::io::Read;
use url::form_urlencoded;

/// Form posts are small; uploads use their own limit.
pub const MAX_FORM_BYTES: usize = 64 * 1024;

pub fn query_params(req: &Request) -> HashMap<String, String> {
    req.uri()
        .query()
        .map(|q| form_urlencoded::parse(q.as_bytes()).into_owned().collect())
        .unwrap_or_default()
}

/// Reads the body, refusing anything over `limit` bytes.
pub fn read_body(req: &mut Request, limit: usize) -> Result<Vec<u8>, ServerError> {
    let mut buf = Vec::new();
    req.body_mut()
        .reader()
        .take(limit as u64 + 1)
        .read_to_end(&mut buf)
        .map_err(|e| ServerError::BadRequest(format!("failed to read body: {e}")))?;

    if buf.len() > limit {
        return Err(ServerError::PayloadTooLarge(format!(
            "request body exceeds {limit} bytes"
        )));
    }
    Ok(buf)
}

/// Parses an `application/x-www-form-urlencoded` body.
pub fn form_params(req: &mut Request) -> Result<HashMap<String, String>, ServerError> {
    let body = read_body(req, MAX_FORM_BYTES)?;
    Ok(form_urlencoded::parse(&body).into_owned().collect())
}

pub fn header<'a>(req: &'a Request, name: &str) -> Option<&'a str> {
    req.headers().get(name).and_then(|v| v.to_str().ok())
}

pub fn cookie(req: &Request, name: &str) -> Option<String> {
    req.headers()
        .get_all("cookie")
        .iter()
        .filter_map(|v| v.to_str().ok())
        .flat_map(|v| v.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(k, _)| *k == name)
        .map(|(_, v)| v.to_string())
}

/// Upload file names arrive percent-encoded in `X-File-Name`.
pub fn upload_file_name(req: &Request) -> Option<String> {
    let raw = header(req, "x-file-name")?;
    form_urlencoded::parse(raw.as_bytes())
        .next()
        .map(|(name, _)| name.into_owned())
}

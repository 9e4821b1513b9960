// src/domain/upload.rs

use crate::errors::ServerError;
use mime::Mime;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

pub const MAX_UPLOAD_BYTES: usize = 5 * 1024 * 1024;

const MAX_FILE_NAME_CHARS: usize = 120;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadKind {
    IdCard,
    Photo,
    UtilityBill,
}

impl UploadKind {
    pub fn as_str(self) -> &'static str {
        match self {
            UploadKind::IdCard => "id_card",
            UploadKind::Photo => "photo",
            UploadKind::UtilityBill => "utility_bill",
        }
    }

    fn accepts(self, mime: &Mime) -> bool {
        match self {
            UploadKind::IdCard | UploadKind::Photo => mime.type_() == mime::IMAGE,
            UploadKind::UtilityBill => {
                let essence = mime.essence_str();
                essence == mime::APPLICATION_PDF.essence_str()
                    || essence == mime::IMAGE_JPEG.essence_str()
                    || essence == mime::IMAGE_PNG.essence_str()
            }
        }
    }

    fn expected(self) -> &'static str {
        match self {
            UploadKind::IdCard | UploadKind::Photo => {
                "please upload an image file (JPG, PNG, etc.)"
            }
            UploadKind::UtilityBill => "please upload a PDF, JPG or PNG file",
        }
    }
}

/// Metadata kept for an accepted file. The bytes are stored separately.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attachment {
    pub file_name: String,
    pub content_type: String,
    pub size_bytes: usize,
    pub sha256: String,
}

/// Checks type and size of an incoming file and describes it.
pub fn validate_upload(
    kind: UploadKind,
    content_type: Option<&str>,
    file_name: Option<&str>,
    bytes: &[u8],
) -> Result<Attachment, ServerError> {
    if bytes.is_empty() {
        return Err(ServerError::BadRequest("empty upload".into()));
    }
    if bytes.len() > MAX_UPLOAD_BYTES {
        return Err(ServerError::PayloadTooLarge(
            "File too large: please upload a file smaller than 5MB".into(),
        ));
    }

    let mime: Mime = content_type
        .and_then(|ct| ct.parse().ok())
        .ok_or_else(|| ServerError::UnsupportedMedia(format!("Invalid file type: {}", kind.expected())))?;

    if !kind.accepts(&mime) {
        return Err(ServerError::UnsupportedMedia(format!(
            "Invalid file type: {}",
            kind.expected()
        )));
    }

    Ok(Attachment {
        file_name: clean_file_name(file_name.unwrap_or_default(), kind),
        content_type: mime.essence_str().to_string(),
        size_bytes: bytes.len(),
        sha256: format!("{:x}", Sha256::digest(bytes)),
    })
}

/// Drops any directory part and control characters; falls back to the kind name.
fn clean_file_name(raw: &str, kind: UploadKind) -> String {
    let base = raw.rsplit(['/', '\\']).next().unwrap_or_default();
    let cleaned: String = base
        .chars()
        .filter(|c| !c.is_control())
        .take(MAX_FILE_NAME_CHARS)
        .collect();
    let cleaned = cleaned.trim();

    if cleaned.is_empty() {
        kind.as_str().to_string()
    } else {
        cleaned.to_string()
    }
}

use crate::msg::FieldValue;
use crate::UploadSelection;

/// MIME types the upload form accepts.
pub const ALLOWED_VIDEO_TYPES: [&str; 6] = [
    "video/mp4",
    "video/avi",
    "video/mov",
    "video/quicktime",
    "video/x-msvideo",
    "video/x-matroska",
];

/// Upload size cap, matching the server's `MAX_CONTENT_LENGTH`.
pub const MAX_UPLOAD_BYTES: u64 = 500 * 1024 * 1024;

/// Why a picked file was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileRejection {
    UnsupportedType,
    TooLarge,
}

impl FileRejection {
    pub fn message(self) -> &'static str {
        match self {
            FileRejection::UnsupportedType => {
                "Invalid file type. Please upload a video file (MP4, AVI, MOV, MKV)"
            }
            FileRejection::TooLarge => "File too large. Maximum size is 500MB.",
        }
    }
}

/// Checks a picked file against the MIME allow-list and the size cap.
pub fn validate_upload(selection: &UploadSelection) -> Result<(), FileRejection> {
    if !ALLOWED_VIDEO_TYPES
        .iter()
        .any(|allowed| allowed.eq_ignore_ascii_case(&selection.declared_type))
    {
        return Err(FileRejection::UnsupportedType);
    }
    if selection.size_bytes > MAX_UPLOAD_BYTES {
        return Err(FileRejection::TooLarge);
    }
    Ok(())
}

/// Coarse YouTube check: substring match, not a URL parse. Matches the
/// server's own validation in `/submit-job`.
pub fn is_probable_youtube_url(url: &str) -> bool {
    url.contains("youtube.com") || url.contains("youtu.be")
}

/// Names of required inputs whose trimmed value is empty.
pub fn missing_required_fields(fields: &[FieldValue]) -> Vec<String> {
    fields
        .iter()
        .filter(|field| field.value.trim().is_empty())
        .map(|field| field.name.clone())
        .collect()
}

/// Password strength across five independent criteria.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StrengthReport {
    /// Number of criteria met, 0..=5.
    pub score: u8,
    pub label: &'static str,
    pub color: &'static str,
    /// Human-readable descriptions of the unmet criteria.
    pub missing: Vec<&'static str>,
}

const STRENGTH_LABELS: [&str; 5] = ["Very Weak", "Weak", "Fair", "Good", "Strong"];
const STRENGTH_COLORS: [&str; 5] = ["#dc3545", "#fd7e14", "#ffc107", "#28a745", "#28a745"];

/// Scores a password: length >= 8, uppercase, lowercase, digit, symbol.
pub fn password_strength(password: &str) -> StrengthReport {
    let mut score = 0u8;
    let mut missing = Vec::new();

    let mut check = |met: bool, hint: &'static str| {
        if met {
            score += 1;
        } else {
            missing.push(hint);
        }
    };

    check(password.chars().count() >= 8, "At least 8 characters");
    check(
        password.chars().any(|c| c.is_ascii_uppercase()),
        "One uppercase letter",
    );
    check(
        password.chars().any(|c| c.is_ascii_lowercase()),
        "One lowercase letter",
    );
    check(password.chars().any(|c| c.is_ascii_digit()), "One number");
    check(
        password.chars().any(|c| !c.is_ascii_alphanumeric()),
        "One special character",
    );

    let (label, color) = if score == 0 {
        ("", STRENGTH_COLORS[0])
    } else {
        (
            STRENGTH_LABELS[usize::from(score) - 1],
            STRENGTH_COLORS[usize::from(score) - 1],
        )
    };

    StrengthReport {
        score,
        label,
        color,
        missing,
    }
}

use crate::camera::SnapshotSource;
use crate::consts::{DEFAULT_R1, DEFAULT_R2};
use crate::error::{Result, ToolscopeError};
use crate::inspect::inspect;

pub const CONTENT_TYPE_PNG: &str = "image/png";
pub const CONTENT_TYPE_TEXT: &str = "text/plain";

/// Names accepted by [`ApiCommand::parse`], in the order clients
/// advertise them.
pub const COMMAND_NAMES: [&str; 2] = ["register", "setcameraposition"];

/// Body plus content type, ready to hand to whatever HTTP layer hosts
/// the endpoint.
#[derive(Clone, Debug)]
pub struct ApiResponse {
    pub content_type: &'static str,
    pub body: Vec<u8>,
}

impl ApiResponse {
    pub fn png(body: Vec<u8>) -> Self {
        Self {
            content_type: CONTENT_TYPE_PNG,
            body,
        }
    }

    pub fn text(message: String) -> Self {
        Self {
            content_type: CONTENT_TYPE_TEXT,
            body: message.into_bytes(),
        }
    }
}

/// Parameters of an alignment-image request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ImageQuery {
    pub width: u32,
    pub height: u32,
    pub r1: u32,
    pub r2: u32,
}

impl ImageQuery {
    /// Parse a URL query string into an image request.
    ///
    /// Requests without the bare `image` flag are not ours and come
    /// back as `Ok(None)`. With the flag present, `width` and `height`
    /// are required, `r1`/`r2` fall back to their defaults, and any
    /// other key (such as `apikey`) is ignored.
    pub fn parse(query: &str) -> Result<Option<Self>> {
        let mut has_image = false;
        let mut width = None;
        let mut height = None;
        let mut r1 = None;
        let mut r2 = None;

        for (key, value) in url::form_urlencoded::parse(query.as_bytes()) {
            match key.as_ref() {
                "image" => has_image = true,
                "width" => width = Some(value.into_owned()),
                "height" => height = Some(value.into_owned()),
                "r1" => r1 = Some(value.into_owned()),
                "r2" => r2 = Some(value.into_owned()),
                _ => {}
            }
        }

        if !has_image {
            return Ok(None);
        }

        let width = parse_u32("width", width.ok_or(ToolscopeError::MissingParam("width"))?)?;
        let height = parse_u32(
            "height",
            height.ok_or(ToolscopeError::MissingParam("height"))?,
        )?;
        let r1 = match r1 {
            Some(value) => parse_u32("r1", value)?,
            None => DEFAULT_R1,
        };
        let r2 = match r2 {
            Some(value) => parse_u32("r2", value)?,
            None => DEFAULT_R2,
        };

        Ok(Some(Self {
            width,
            height,
            r1,
            r2,
        }))
    }
}

fn parse_u32(name: &'static str, value: String) -> Result<u32> {
    value
        .parse()
        .map_err(|_| ToolscopeError::InvalidParam { name, value })
}

/// Serve a GET against the alignment endpoint.
///
/// Returns `None` when the query lacks the `image` flag, leaving the
/// request for other handlers. Otherwise the response is either the
/// annotated PNG or, if anything along the way failed, the error text
/// as `text/plain` so the failure shows up inside the panel's image
/// slot instead of silently breaking it.
pub fn handle_get(query: &str, source: &dyn SnapshotSource) -> Option<ApiResponse> {
    let request = match ImageQuery::parse(query) {
        Ok(Some(request)) => request,
        Ok(None) => return None,
        Err(err) => {
            tracing::warn!(error = %err, "Rejecting malformed image request");
            return Some(ApiResponse::text(err.to_string()));
        }
    };

    match image_response(&request, source) {
        Ok(response) => Some(response),
        Err(err) => {
            tracing::warn!(error = %err, "Image request failed");
            Some(ApiResponse::text(err.to_string()))
        }
    }
}

fn image_response(request: &ImageQuery, source: &dyn SnapshotSource) -> Result<ApiResponse> {
    let inspection = inspect(
        source,
        request.width,
        request.height,
        request.r1,
        request.r2,
    )?;
    Ok(ApiResponse::png(inspection.snapshot.encode_png()?))
}

/// Commands the endpoint advertises alongside the image GET.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ApiCommand {
    Register,
    SetCameraPosition,
}

impl ApiCommand {
    pub fn parse(name: &str) -> Result<Self> {
        match name {
            "register" => Ok(Self::Register),
            "setcameraposition" => Ok(Self::SetCameraPosition),
            other => Err(ToolscopeError::UnknownCommand(other.to_string())),
        }
    }
}

/// Dispatch a POST command. Both commands are accepted but do nothing
/// yet.
pub fn handle_command(command: ApiCommand) {
    match command {
        ApiCommand::Register => {
            // TODO: remember registered clients once push refresh lands.
            tracing::debug!("Client registered");
        }
        ApiCommand::SetCameraPosition => {
            // TODO: persist the offset once settings grow a camera position entry.
            tracing::debug!("Camera position update requested");
        }
    }
}

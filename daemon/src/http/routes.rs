use std::{
    io::{Read, Write},
    sync::Arc,
};

use glowstrip::{AnimationStore, ControlCommand, FrameSink, Mode, Rgb, StateSnapshot};
use serde::{Deserialize, Serialize, de::DeserializeOwned};

use super::{
    ContentHeaders,
    ContentType,
    Error,
    HttpConnection,
    HttpHandler,
    HttpMethod,
    HttpResult,
    ResponseHeaders,
    TextEncoding,
};
use crate::driver::MAX_LEDS;

const CONTROL_PAGE: &str = include_str!("page.html");

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
struct ColorDto {
    r: u8,
    g: u8,
    b: u8,
}

impl From<Rgb> for ColorDto {
    fn from(color: Rgb) -> Self {
        Self {
            r: color.r,
            g: color.g,
            b: color.b,
        }
    }
}

impl From<ColorDto> for Rgb {
    fn from(color: ColorDto) -> Self {
        Rgb::new(color.r, color.g, color.b)
    }
}

#[derive(Debug, Deserialize)]
struct BrightnessRequest {
    #[serde(default = "full_brightness")]
    brightness: u8,
}

fn full_brightness() -> u8 {
    u8::MAX
}

#[derive(Debug, Deserialize)]
struct PatternRequest {
    #[serde(default = "default_pattern")]
    pattern: String,
}

fn default_pattern() -> String {
    Mode::Solid.as_str().to_owned()
}

#[derive(Debug, Serialize)]
struct StateResponse {
    mode: &'static str,
    color: ColorDto,
    brightness: u8,
}

impl From<StateSnapshot> for StateResponse {
    fn from(snapshot: StateSnapshot) -> Self {
        Self {
            mode: snapshot.mode.as_str(),
            color: snapshot.color.into(),
            brightness: snapshot.brightness,
        }
    }
}

#[derive(Debug, Serialize)]
struct StatusResponse {
    status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<String>,
}

impl StatusResponse {
    fn ok() -> Self {
        Self {
            status: "ok",
            message: None,
        }
    }

    fn error(message: String) -> Self {
        Self {
            status: "error",
            message: Some(message),
        }
    }
}

/// Failure of a control route
enum RouteError {
    /// The request is invalid, answered with `400`
    BadRequest(String),
    /// The strip rejected the command, answered with `500`
    Internal(String),
    /// The connection itself failed
    Http(Error),
}

impl From<Error> for RouteError {
    fn from(err: Error) -> Self {
        match err {
            Error::Json(_) | Error::NoData | Error::TooLarge(_) => {
                RouteError::BadRequest(err.to_string())
            }
            err => RouteError::Http(err),
        }
    }
}

/// HTTP control surface of the animation store
pub struct ControlRoutes<F> {
    store: Arc<AnimationStore<F, MAX_LEDS>>,
}

impl<F: FrameSink> ControlRoutes<F> {
    pub fn new(store: Arc<AnimationStore<F, MAX_LEDS>>) -> Self {
        Self { store }
    }

    fn apply(&self, command: ControlCommand) -> Result<(), RouteError> {
        command.apply(&self.store).map_err(|err| {
            log::error!("Unable to apply {command:?}: {err:?}");
            RouteError::Internal(format!("{err:?}"))
        })
    }

    fn set_color<S: Read + Write>(&self, conn: &mut HttpConnection<S>) -> Result<(), RouteError> {
        let color: ColorDto = read_request(conn)?;
        self.apply(ControlCommand::SetColor(color.into()))?;
        self.apply(ControlCommand::SetMode(Mode::Solid))
    }

    fn set_brightness<S: Read + Write>(
        &self,
        conn: &mut HttpConnection<S>,
    ) -> Result<(), RouteError> {
        let request: BrightnessRequest = read_request(conn)?;
        self.apply(ControlCommand::SetBrightness(request.brightness))
    }

    fn set_pattern<S: Read + Write>(&self, conn: &mut HttpConnection<S>) -> Result<(), RouteError> {
        let request: PatternRequest = read_request(conn)?;
        let mode = Mode::parse_from_str(&request.pattern).ok_or_else(|| {
            RouteError::BadRequest(format!("Unknown pattern `{}`", request.pattern))
        })?;
        self.apply(ControlCommand::SetMode(mode))
    }
}

impl<F: FrameSink> HttpHandler for ControlRoutes<F> {
    fn handle_request<S: Read + Write>(&self, conn: HttpConnection<S>) -> HttpResult {
        let mut conn = conn;
        let result = match conn.route() {
            (HttpMethod::Get, "/") => return handle_get_page(&mut conn),
            (HttpMethod::Get, "/api/state") => {
                return conn.write_json(&StateResponse::from(self.store.snapshot()));
            }
            (HttpMethod::Post, "/api/color") => self.set_color(&mut conn),
            (HttpMethod::Post, "/api/brightness") => self.set_brightness(&mut conn),
            (HttpMethod::Post, "/api/pattern") => self.set_pattern(&mut conn),
            (HttpMethod::Post, "/api/toggle") => self.apply(ControlCommand::Toggle),
            _ => return serve_404(&mut conn),
        };

        match result {
            Ok(()) => conn.write_json(&StatusResponse::ok()),
            Err(RouteError::BadRequest(message)) => {
                log::debug!("Rejected {} request: {}", conn.path, message);
                conn.write_json_with(ResponseHeaders::bad_request(), &StatusResponse::error(message))
            }
            Err(RouteError::Internal(message)) => conn.write_json_with(
                ResponseHeaders::internal_error(),
                &StatusResponse::error(message),
            ),
            Err(RouteError::Http(err)) => Err(err),
        }
    }
}

fn read_request<T: DeserializeOwned, S: Read + Write>(
    conn: &mut HttpConnection<S>,
) -> Result<T, RouteError> {
    Ok(conn.read_json()?)
}

fn handle_get_page<S: Read + Write>(conn: &mut HttpConnection<S>) -> HttpResult {
    let content = ContentHeaders::new(ContentType::TextHtml)
        .with_text_encoding(TextEncoding::Utf8)
        .with_length(CONTROL_PAGE.len());
    conn.write_headers(&ResponseHeaders::success().with_content(content))?;
    conn.write_body(CONTROL_PAGE.as_bytes())
}

fn serve_404<S: Read + Write>(conn: &mut HttpConnection<S>) -> HttpResult {
    conn.write_json_with(
        ResponseHeaders::not_found(),
        &StatusResponse::error(format!("No route for {}", conn.path)),
    )
}

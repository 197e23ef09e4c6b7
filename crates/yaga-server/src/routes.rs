//! URL routing.
//!
//! | Method | Path | Route |
//! |---|---|---|
//! | GET | `/` | `Index` |
//! | GET | `/static/{path}` | `StaticAsset` |
//! | POST | `/exercise/chord-practice/start` | `StartChordPractice` |
//! | GET | `/exercise/chord-practice/{session_id}/next` | `NextChordPrompt` |

use percent_encoding::percent_decode_str;
use tiny_http::Method;

const INDEX_FILE: &str = "index.html";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Index,
    /// Path relative to the static directory
    StaticAsset(String),
    StartChordPractice,
    NextChordPrompt { session_id: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteMatch {
    Found(Route),
    MethodNotAllowed,
    NotFound,
}

impl Route {
    /// Matches a request line against the route table.
    ///
    /// The query string is ignored.
    pub fn resolve(method: &Method, url: &str) -> RouteMatch {
        let path = url.split(['?', '#']).next().unwrap_or_default();
        let Some(path) = path.strip_prefix('/') else {
            return RouteMatch::NotFound;
        };
        let segments: Vec<&str> = path.split('/').collect();

        let (route, allowed) = match segments.as_slice() {
            [""] => (Route::Index, Method::Get),
            ["static", rest @ ..] => match static_path(rest) {
                Some(asset) => (Route::StaticAsset(asset), Method::Get),
                None => return RouteMatch::NotFound,
            },
            ["exercise", "chord-practice", "start"] => (Route::StartChordPractice, Method::Post),
            ["exercise", "chord-practice", session_id, "next"] if !session_id.is_empty() => (
                Route::NextChordPrompt {
                    session_id: session_id.to_string(),
                },
                Method::Get,
            ),
            _ => return RouteMatch::NotFound,
        };

        if *method == allowed {
            RouteMatch::Found(route)
        } else {
            RouteMatch::MethodNotAllowed
        }
    }
}

/// Joins the percent-decoded segments after `/static`, serving `index.html`
/// for directories. `None` if a segment does not decode to UTF-8.
fn static_path(rest: &[&str]) -> Option<String> {
    let decoded = rest
        .iter()
        .map(|segment| {
            percent_decode_str(segment)
                .decode_utf8()
                .ok()
                .map(|s| s.into_owned())
        })
        .collect::<Option<Vec<String>>>()?;

    match decoded.last().map(String::as_str) {
        None | Some("") => {
            let dir: Vec<&str> = decoded
                .iter()
                .map(String::as_str)
                .filter(|s| !s.is_empty())
                .collect();
            if dir.is_empty() {
                Some(INDEX_FILE.to_string())
            } else {
                Some(format!("{}/{}", dir.join("/"), INDEX_FILE))
            }
        }
        Some(_) => Some(decoded.join("/")),
    }
}

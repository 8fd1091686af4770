//! HTTP span helpers.

use uuid::Uuid;

#[derive(Debug, Clone)]
pub(super) struct RequestSpanName {
    /// Path with order ids collapsed so metric labels stay bounded.
    pub(super) route: String,
    pub(super) span_name: String,
}

pub(super) fn request_span_name(method: &str, path: &str) -> RequestSpanName {
    let route = normalise_route(path);
    let span_name = format!("{method} {route}");

    RequestSpanName { route, span_name }
}

fn normalise_route(path: &str) -> String {
    if path == "/" {
        return "/".to_owned();
    }

    path.trim_start_matches('/')
        .split('/')
        .map(|segment| {
            if Uuid::parse_str(segment).is_ok() {
                "{uuid}"
            } else {
                segment
            }
        })
        .fold(String::new(), |mut route, segment| {
            route.push('/');
            route.push_str(segment);
            route
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn order_ids_are_collapsed() {
        let names = request_span_name(
            "GET",
            "/api/verificar-pagamento/01900000-0000-7000-8000-000000000000",
        );

        assert_eq!(names.route, "/api/verificar-pagamento/{uuid}");
        assert_eq!(names.span_name, "GET /api/verificar-pagamento/{uuid}");
    }

    #[test]
    fn static_paths_are_kept() {
        assert_eq!(
            request_span_name("POST", "/api/gerar-pix").route,
            "/api/gerar-pix"
        );
        assert_eq!(request_span_name("GET", "/").route, "/");
    }
}

//! Hypermedia links attached to product representations.

use salvo::{Request, oapi::ToSchema};
use serde::{Deserialize, Serialize};

use catalog_app::domain::products::records::ProductUuid;

const FALLBACK_BASE_URL: &str = "http://localhost:8000";
const JSON_MEDIA_TYPE: &str = "application/json";

/// A link to an action available on a product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub(crate) struct Link {
    pub rel: String,
    pub href: String,
    pub action: String,
    pub types: Vec<String>,
}

impl Link {
    fn new(href: String, action: &str) -> Self {
        Self {
            rel: "self".to_string(),
            href,
            action: action.to_string(),
            types: vec![JSON_MEDIA_TYPE.to_string()],
        }
    }
}

/// `<scheme>://<host>` of the current request.
pub(crate) fn base_url(req: &Request) -> String {
    let host = req
        .header::<String>("host")
        .filter(|host| !host.is_empty())
        .or_else(|| req.uri().host().map(ToString::to_string));

    match host {
        Some(host) => format!("{}://{host}", req.scheme()),
        None => FALLBACK_BASE_URL.to_string(),
    }
}

pub(crate) fn product_links(base: &str, product: ProductUuid) -> Vec<Link> {
    let item = format!("{base}/products/{product}/");

    vec![
        Link::new(format!("{base}/products"), "POST"),
        Link::new(item.clone(), "GET"),
        Link::new(item.clone(), "PUT"),
        Link::new(item, "DELETE"),
    ]
}

//! Redirect demo: `/redirect_test` bounces to `/another_page`.

use axum::response::Response;

use crate::http::{response::found, Payload, ProxyContext};

pub async fn redirect_test(context: ProxyContext) -> Response {
    found(&context.url_for("/another_page"))
}

pub async fn another_page(context: ProxyContext) -> Payload {
    Payload::Text(another_page_message(&context))
}

pub fn another_page_message(context: &ProxyContext) -> String {
    format!(
        "You made it with redirect( url_for('another_page') ).\
         A call to flask's url_for('index_page') returns {}.",
        context.root_path()
    )
}

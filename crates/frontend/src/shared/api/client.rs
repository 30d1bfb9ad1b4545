//! Thin JSON client over `gloo-net`.
//!
//! Every call goes to `{api_base}{path}`, carries the bearer token when a
//! session exists, and maps non-2xx responses to [`ApiError`]. A 401 also
//! fires the handler registered with [`set_unauthorized_handler`].

use std::cell::RefCell;
use std::rc::Rc;

use contracts::shared::{ApiEnvelope, Paginated};
use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::error::ApiError;
use crate::shared::config::api_url;
use crate::system::auth::storage;

thread_local! {
    static ON_UNAUTHORIZED: RefCell<Option<Rc<dyn Fn()>>> = RefCell::new(None);
}

/// Registers what happens when the backend rejects the session.
pub fn set_unauthorized_handler(handler: impl Fn() + 'static) {
    ON_UNAUTHORIZED.with(|slot| *slot.borrow_mut() = Some(Rc::new(handler)));
}

fn notify_unauthorized() {
    let handler = ON_UNAUTHORIZED.with(|slot| slot.borrow().clone());
    if let Some(handler) = handler {
        handler();
    }
}

fn prepare(builder: RequestBuilder) -> RequestBuilder {
    let builder = builder.header("Accept", "application/json");
    match storage::get_token() {
        Some(token) => builder.header("Authorization", &format!("Bearer {token}")),
        None => builder,
    }
}

async fn dispatch(request: Request) -> Result<Response, ApiError> {
    let url = request.url();
    let method = request.method();
    let response = request.send().await.map_err(|e| {
        log::warn!("{method:?} {url} failed: {e}");
        ApiError::Network(e.to_string())
    })?;

    if response.ok() {
        log::debug!("{method:?} {url} -> {}", response.status());
        return Ok(response);
    }

    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    let error = ApiError::from_response(status, &body);
    log::warn!("{method:?} {url} -> {status}: {error}");
    if error.is_unauthorized() {
        notify_unauthorized();
    }
    Err(error)
}

async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let text = response.text().await?;
    Ok(serde_json::from_str(&text)?)
}

/// `GET` returning a `{ data }` envelope.
pub async fn get_data<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    let response = dispatch(prepare(Request::get(&api_url(path))).build()?).await?;
    let envelope: ApiEnvelope<T> = read_json(response).await?;
    Ok(envelope.data)
}

/// `GET` with a query string built from `query`.
pub async fn get_data_with<Q: Serialize, T: DeserializeOwned>(
    path: &str,
    query: &Q,
) -> Result<T, ApiError> {
    get_data(&with_query(path, query)?).await
}

/// `GET` of a paginated list; the whole body is the page.
pub async fn get_page<Q: Serialize, T: DeserializeOwned>(
    path: &str,
    query: &Q,
) -> Result<Paginated<T>, ApiError> {
    let url = api_url(&with_query(path, query)?);
    let response = dispatch(prepare(Request::get(&url)).build()?).await?;
    read_json(response).await
}

pub async fn post_data<B: Serialize, T: DeserializeOwned>(
    path: &str,
    body: &B,
) -> Result<T, ApiError> {
    let response = dispatch(prepare(Request::post(&api_url(path))).json(body)?).await?;
    let envelope: ApiEnvelope<T> = read_json(response).await?;
    Ok(envelope.data)
}

pub async fn put_data<B: Serialize, T: DeserializeOwned>(
    path: &str,
    body: &B,
) -> Result<T, ApiError> {
    let response = dispatch(prepare(Request::put(&api_url(path))).json(body)?).await?;
    let envelope: ApiEnvelope<T> = read_json(response).await?;
    Ok(envelope.data)
}

/// `POST` whose response body is irrelevant.
pub async fn post_unit<B: Serialize>(path: &str, body: &B) -> Result<(), ApiError> {
    dispatch(prepare(Request::post(&api_url(path))).json(body)?).await?;
    Ok(())
}

pub async fn delete(path: &str) -> Result<(), ApiError> {
    dispatch(prepare(Request::delete(&api_url(path))).build()?).await?;
    Ok(())
}

/// Appends `?{query}` unless the query serializes to nothing.
pub fn with_query<Q: Serialize>(path: &str, query: &Q) -> Result<String, ApiError> {
    let qs = serde_qs::to_string(query).map_err(|e| ApiError::Decode(e.to_string()))?;
    if qs.is_empty() {
        Ok(path.to_string())
    } else {
        Ok(format!("{path}?{qs}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::shared::{ListQuery, SortDirection};

    #[test]
    fn list_query_skips_empty_options() {
        let query = ListQuery {
            page: 2,
            per_page: 25,
            ..ListQuery::default()
        };
        assert_eq!(
            with_query("/invoices", &query).unwrap(),
            "/invoices?page=2&per_page=25"
        );
    }

    #[test]
    fn list_query_carries_sort_and_search() {
        let query = ListQuery {
            page: 1,
            per_page: 10,
            sort_by: Some("date".into()),
            sort_dir: Some(SortDirection::Desc),
            search: Some("acme co".into()),
        };
        let url = with_query("/invoices", &query).unwrap();
        assert!(url.starts_with("/invoices?page=1&per_page=10"));
        assert!(url.contains("sort_by=date"));
        assert!(url.contains("sort_dir=desc"));
        assert!(url.contains("search=acme"));
    }
}

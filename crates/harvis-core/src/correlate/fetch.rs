//! Report text retrieval over HTTP.
//!
//! Uses the curl crate (libcurl) with redirects followed; any final status
//! >= 400 is a retrieval failure. Runs in the current thread; call from
//! `spawn_blocking` when used from async code.

use std::time::Duration;

use crate::error::CorrelateError;

/// GETs the report document and returns its body as text.
pub fn fetch_report_text(
    url: &str,
    connect_timeout: Duration,
    timeout: Duration,
) -> Result<String, CorrelateError> {
    url::Url::parse(url)
        .map_err(|e| CorrelateError::Retrieval(format!("invalid report URL {url}: {e}")))?;

    let mut body: Vec<u8> = Vec::new();

    let mut easy = curl::easy::Easy::new();
    easy.url(url).map_err(retrieval)?;
    easy.get(true).map_err(retrieval)?;
    easy.follow_location(true).map_err(retrieval)?;
    easy.connect_timeout(connect_timeout).map_err(retrieval)?;
    easy.timeout(timeout).map_err(retrieval)?;

    {
        let mut transfer = easy.transfer();
        transfer
            .write_function(|data| {
                body.extend_from_slice(data);
                Ok(data.len())
            })
            .map_err(retrieval)?;
        transfer
            .perform()
            .map_err(|e| CorrelateError::Retrieval(format!("GET {url}: {e}")))?;
    }

    let code = easy.response_code().map_err(retrieval)?;
    if code >= 400 {
        return Err(CorrelateError::Retrieval(format!(
            "report URL returned HTTP {code}"
        )));
    }

    String::from_utf8(body)
        .map_err(|_| CorrelateError::Retrieval("report body is not valid UTF-8".to_string()))
}

fn retrieval(err: curl::Error) -> CorrelateError {
    CorrelateError::Retrieval(err.to_string())
}

/* This file is part of the Shorts Bot Dashboard project
*
*  Copyright (C) 2026 Shorts Bot Dashboard contributors
*
*  This program is free software: you can redistribute it and/or modify
*  it under the terms of the GNU Affero General Public License as published by
*  the Free Software Foundation, either version 3 of the License, or
*  (at your option) any later version.
*
*  This program is distributed in the hope that it will be useful,
*  but WITHOUT ANY WARRANTY; without even the implied warranty of
*  MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
*  GNU Affero General Public License for more details.
*
*  You should have received a copy of the GNU Affero General Public License
*  along with this program.  If not, see <https://www.gnu.org/licenses/>.
*/
use chrono::{DateTime, FixedOffset};
use cloneable_errors::{bail, ErrorContext, ResContext};
use reqwest::Url;
use shorts_dashboard_api::ActionResponse;

use crate::constants::REQWEST_CLIENT;

const TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

pub fn render_datetime(dt: DateTime<FixedOffset>) -> String {
    format!("{}", dt.format(TIME_FORMAT))
}

pub trait ReqwestUrlExt {
    #[allow(clippy::result_unit_err)]
    fn join_segments<I>(&self, segments: I) -> Result<Self, ()>
    where I: IntoIterator,
    I::Item: AsRef<str>,
    Self: Sized;
}

impl ReqwestUrlExt for Url {
    fn join_segments<I>(&self, segments: I) -> Result<Self, ()>
        where I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut url = self.clone();
        url.path_segments_mut()?.pop_if_empty().extend(segments);
        Ok(url)
    }
}

pub trait ReqwestResponseExt: Sized {
    #[allow(async_fn_in_trait)]  // this is for local use
    async fn check_status(self) -> Result<Self, ErrorContext>;
}

impl ReqwestResponseExt for reqwest::Response {
    async fn check_status(self) -> Result<Self, ErrorContext> {
        let status = self.status();
        if status.is_success() {
            return Ok(self);
        }
        let body = self.text().await.with_context(|| format!("The server returned a '{status}' status code"))?;
        match serde_json::from_str::<ActionResponse>(&body) {
            Ok(ActionResponse { error: Some(message), .. }) => bail!("{message} (status '{status}')",),
            _ if body.trim().is_empty() => bail!("The server returned a '{status}' status code",),
            _ => bail!("The server returned a '{status}' status code with the following body:\n{body}",),
        }
    }
}

pub async fn api_request<U, R>(url: U) -> Result<R, ErrorContext>
where
    U: reqwest::IntoUrl,
    R: serde::de::DeserializeOwned,
{
    REQWEST_CLIENT
        .get(url)
        .header("Accept", "application/json")
        .send().await.context("Failed to send the request")?
        .check_status().await?
        .json().await.context("Failed to deserialize response")
}

/// POSTs to an action endpoint that answers with an [`ActionResponse`]
///
/// An empty body counts as an implicit success, an explicit rejection becomes an error.
pub async fn api_action<U: reqwest::IntoUrl>(url: U) -> Result<ActionResponse, ErrorContext> {
    let body = REQWEST_CLIENT
        .post(url)
        .header("Accept", "application/json")
        .send().await.context("Failed to send the request")?
        .check_status().await?
        .text().await.context("Failed to read the response body")?;
    if body.trim().is_empty() {
        return Ok(ActionResponse::default());
    }
    let response: ActionResponse = serde_json::from_str(&body).context("Failed to deserialize response")?;
    if response.is_rejected() {
        match response.error {
            Some(message) => bail!("{}", message),
            None => bail!("The server rejected the request"),
        }
    }
    Ok(response)
}

/// POSTs to an endpoint whose response body is not used
pub async fn api_post<U: reqwest::IntoUrl>(url: U) -> Result<(), ErrorContext> {
    REQWEST_CLIENT
        .post(url)
        .send().await.context("Failed to send the request")?
        .check_status().await?;
    Ok(())
}

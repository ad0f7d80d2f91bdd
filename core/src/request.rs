// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

use std::mem;
use std::str::FromStr;

use http::header::HeaderName;
use http::header::HOST;
use http::uri::Authority;
use http::uri::PathAndQuery;
use http::uri::Scheme;
use http::HeaderMap;
use http::Method;
use http::Uri;
use http::Version;

use crate::Result;

/// Signing context for request.
#[derive(Debug)]
pub struct SigningRequest {
    /// HTTP method.
    pub method: Method,
    /// HTTP scheme.
    pub scheme: Option<Scheme>,
    /// HTTP authority.
    pub authority: Option<Authority>,
    /// HTTP path, `/` if the uri has none.
    pub path: String,
    /// Raw query string without the leading `?`, kept byte for byte.
    pub query: Option<String>,
    /// HTTP version.
    pub version: Version,
    /// HTTP headers.
    pub headers: HeaderMap,
}

impl SigningRequest {
    /// Build a signing context from http::request::Parts.
    pub fn build(parts: &mut http::request::Parts) -> Result<Self> {
        let uri = mem::take(&mut parts.uri).into_parts();
        let paq = uri
            .path_and_query
            .unwrap_or_else(|| PathAndQuery::from_static("/"));

        Ok(SigningRequest {
            method: parts.method.clone(),
            scheme: uri.scheme,
            authority: uri.authority,
            path: paq.path().to_string(),
            query: paq.query().map(|v| v.to_string()),
            version: parts.version,

            // Take the headers out of the request to avoid copy.
            // We will return it back when apply the context.
            headers: mem::take(&mut parts.headers),
        })
    }

    /// Apply the signing context back to http::request::Parts.
    pub fn apply(mut self, parts: &mut http::request::Parts) -> Result<()> {
        // Return headers back.
        mem::swap(&mut parts.headers, &mut self.headers);
        parts.method = self.method;
        parts.version = self.version;
        parts.uri = {
            let mut uri_parts = mem::take(&mut parts.uri).into_parts();
            uri_parts.scheme = self.scheme;
            uri_parts.authority = self.authority;
            uri_parts.path_and_query = Some(PathAndQuery::from_str(&match self.query {
                Some(query) => format!("{}?{}", self.path, query),
                None => self.path,
            })?);
            Uri::from_parts(uri_parts)?
        };

        Ok(())
    }

    /// Path plus `?query` when a query is present, `/` for an empty path.
    pub fn path_and_query(&self) -> String {
        let path = if self.path.is_empty() { "/" } else { &self.path };
        match &self.query {
            Some(query) => format!("{path}?{query}"),
            None => path.to_string(),
        }
    }

    /// The host this request is sent to.
    ///
    /// Prefers the `Host` header and falls back to the uri authority.
    pub fn host(&self) -> Option<&str> {
        match self.headers.get(HOST) {
            Some(v) => v.to_str().ok(),
            None => self.authority.as_ref().map(|v| v.as_str()),
        }
    }

    /// Get the first value of a header.
    ///
    /// Returns `Ok(None)` if header not found.
    #[inline]
    pub fn header_get(&self, key: &HeaderName) -> Result<Option<&str>> {
        match self.headers.get(key) {
            Some(v) => Ok(Some(v.to_str()?)),
            None => Ok(None),
        }
    }
}

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

use async_trait::async_trait;
use bytes::Bytes;
use http::{Method, Request};
use jmsapi_core::utils::QueryValues;
use jmsapi_core::Result;
use serde::de::DeserializeOwned;
use serde::Serialize;

/// JmsApi is the surface every JumpServer resource is written against.
#[async_trait]
pub trait JmsApi: Send + Sync {
    /// Build an authenticated request.
    ///
    /// `body` is encoded as JSON, the request carries an empty body if it's
    /// `None`. `Content-Type: application/json` is always set. Nothing is sent.
    async fn make_request<B>(
        &self,
        method: Method,
        endpoint: &str,
        body: Option<&B>,
    ) -> Result<Request<Bytes>>
    where
        B: Serialize + Sync + ?Sized;

    /// Send the request and decode the JSON response into `result`.
    ///
    /// Any status in `[200, 400)` is a success. The body is not decoded if
    /// `result` is `None`.
    async fn do_request<T>(&self, req: Request<Bytes>, result: Option<&mut T>) -> Result<()>
    where
        T: DeserializeOwned + Send;

    /// Replace the query of the request with the encoded `params`.
    ///
    /// Signatures covering `(request-target)` are computed over the query
    /// the request had when it was built, so changing it afterwards breaks
    /// them. Append the query to the endpoint before
    /// [`JmsApi::make_request`] when signing with an access key.
    fn set_query<'a>(
        &self,
        req: &'a mut Request<Bytes>,
        params: &QueryValues,
    ) -> Result<&'a mut Request<Bytes>>;

    /// The configured base url.
    fn get_endpoint(&self) -> &str;
}

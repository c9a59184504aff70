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
use http::request::Parts;
use objstore_core::hash::base64_hmac_sha1;
use objstore_core::time::{format_http_date, now};
use objstore_core::{
    Context, Error, OsEnv, ProvideCredential, Result, SignRequest, Signer, SigningCredential,
};

#[derive(Clone, Debug)]
struct TokenCredential {
    key_id: String,
    secret: String,
}

impl SigningCredential for TokenCredential {
    fn is_valid(&self) -> bool {
        !self.key_id.is_empty() && !self.secret.is_empty()
    }
}

/// Loads `TOKEN_KEY_ID` and `TOKEN_SECRET` from env.
#[derive(Debug)]
struct EnvTokenProvider;

#[async_trait]
impl ProvideCredential for EnvTokenProvider {
    type Credential = TokenCredential;

    async fn provide_credential(&self, ctx: &Context) -> Result<Option<Self::Credential>> {
        let (Some(key_id), Some(secret)) =
            (ctx.env_var("TOKEN_KEY_ID"), ctx.env_var("TOKEN_SECRET"))
        else {
            return Ok(None);
        };
        Ok(Some(TokenCredential { key_id, secret }))
    }
}

/// Signs `METHOD\npath\ndate` into an `x-token-signature` header.
#[derive(Debug)]
struct TokenSigner;

#[async_trait]
impl SignRequest for TokenSigner {
    type Credential = TokenCredential;

    async fn sign_request(
        &self,
        _ctx: &Context,
        req: &mut Parts,
        credential: Option<&Self::Credential>,
    ) -> Result<()> {
        let Some(cred) = credential else {
            return Err(Error::credential_invalid(
                "TOKEN_KEY_ID and TOKEN_SECRET must be set",
            ));
        };

        let date = format_http_date(now());
        let string_to_sign = format!("{}\n{}\n{}", req.method, req.uri.path(), date);
        let signature = base64_hmac_sha1(cred.secret.as_bytes(), string_to_sign.as_bytes());

        req.headers.insert(http::header::DATE, date.parse()?);
        req.headers.insert("x-token-key-id", cred.key_id.parse()?);
        req.headers.insert("x-token-signature", signature.parse()?);
        Ok(())
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let ctx = Context::new().with_env(OsEnv);
    let signer = Signer::new(ctx, EnvTokenProvider, TokenSigner);

    let mut parts = http::Request::get("https://api.example.com/v1/buckets")
        .body(())?
        .into_parts()
        .0;

    match signer.sign(&mut parts).await {
        Ok(()) => println!("signed headers: {:?}", parts.headers),
        Err(err) => eprintln!("failed to sign request: {err}"),
    }
    Ok(())
}

//! Users and their avatars.

use almrest::{QueryParams, RequestOptions};
use serde::Serialize;

use super::endpoint_path;
use crate::error::ClientError;
use crate::transport::{ApiResponse, FilePart, Multipart, RequestBody, Session};

const USERS: &str = "users";
const USER: &str = "users/{}";
const GET_AVATAR: &str = "users/{}/actions/getAvatar";
const UPDATE_AVATAR: &str = "users/{}/actions/updateAvatar";

#[derive(Clone)]
pub struct Users {
    session: Session,
}

impl Users {
    pub fn new(session: Session) -> Self {
        Self { session }
    }

    /// `GET users`
    pub async fn get_users(&self, options: &RequestOptions) -> Result<ApiResponse, ClientError> {
        self.session.get(USERS, options.to_query()).await
    }

    /// `POST users`
    pub async fn post_users<B: Serialize + ?Sized>(
        &self,
        body: &B,
    ) -> Result<ApiResponse, ClientError> {
        self.session.post(USERS, RequestBody::json(body)?).await
    }

    /// `GET users/{userId}`
    pub async fn get_user(
        &self,
        user_id: &str,
        options: &RequestOptions,
    ) -> Result<ApiResponse, ClientError> {
        let path = endpoint_path(USER, &[user_id]);
        self.session.get(&path, options.to_query()).await
    }

    pub async fn patch_user<B: Serialize + ?Sized>(
        &self,
        user_id: &str,
        body: &B,
    ) -> Result<ApiResponse, ClientError> {
        let path = endpoint_path(USER, &[user_id]);
        self.session.patch(&path, RequestBody::json(body)?).await
    }

    /// The avatar image bytes.
    pub async fn get_avatar(&self, user_id: &str) -> Result<ApiResponse, ClientError> {
        let path = endpoint_path(GET_AVATAR, &[user_id]);
        self.session.get(&path, QueryParams::new()).await
    }

    /// Replace the avatar. The multipart body carries the file only, with no
    /// `resource` field.
    pub async fn update_avatar(
        &self,
        user_id: &str,
        file: FilePart,
    ) -> Result<ApiResponse, ClientError> {
        let path = endpoint_path(UPDATE_AVATAR, &[user_id]);
        let body = RequestBody::Multipart(Multipart::files(vec![file]));
        self.session.post(&path, body).await
    }
}

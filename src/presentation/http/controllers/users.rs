// src/presentation/http/controllers/users.rs
use crate::application::{
    commands::users::UpdateProfileCommand,
    dto::{Page, PostDto, UserDto},
    queries::{posts::ListPostsByAuthorQuery, users::GetUserQuery},
};
use crate::presentation::http::controllers::posts::PageQuery;
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::Authenticated;
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::{Path, Query},
};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct UpdateProfileRequest {
    pub username: Option<String>,
    pub email: Option<String>,
    pub name: Option<String>,
    pub bio: Option<String>,
    pub avatar: Option<String>,
    pub password: Option<String>,
}

pub async fn me(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
) -> HttpResult<Json<UserDto>> {
    state
        .services
        .user_queries
        .get_profile(&user)
        .await
        .into_http()
        .map(Json)
}

pub async fn update_me(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Json(payload): Json<UpdateProfileRequest>,
) -> HttpResult<Json<UserDto>> {
    let command = UpdateProfileCommand {
        username: payload.username,
        email: payload.email,
        name: payload.name,
        bio: payload.bio,
        avatar: payload.avatar,
        password: payload.password,
    };

    state
        .services
        .user_commands
        .update_profile(&user, command)
        .await
        .into_http()
        .map(Json)
}

pub async fn get_user(
    Extension(state): Extension<HttpState>,
    Path(id): Path<String>,
) -> HttpResult<Json<UserDto>> {
    state
        .services
        .user_queries
        .get_user(GetUserQuery {
            id: Some(id),
            ..GetUserQuery::default()
        })
        .await
        .into_http()
        .map(Json)
}

pub async fn list_user_posts(
    Extension(state): Extension<HttpState>,
    Path(id): Path<String>,
    Query(params): Query<PageQuery>,
) -> HttpResult<Json<Page<PostDto>>> {
    state
        .services
        .post_queries
        .list_posts_by_author(ListPostsByAuthorQuery {
            author_id: id,
            params: params.params(),
        })
        .await
        .into_http()
        .map(Json)
}

use std::sync::Arc;

mod support;

use commonminds_core::application::commands::posts::{
    CreatePostCommand, DeletePostCommand, PostCommandService, UpdatePostCommand,
};
use commonminds_core::application::error::ApplicationError;
use commonminds_core::domain::post::services::PostSlugService;
use commonminds_core::domain::user::UserId;
use commonminds_core::infrastructure::util::DefaultSlugGenerator;

use support::builders::authenticated;
use support::mocks::{DummyClock, InMemoryPostRepo};

fn service(repo: Arc<InMemoryPostRepo>) -> PostCommandService {
    let slug_service = Arc::new(PostSlugService::new(
        repo.clone(),
        Arc::new(DefaultSlugGenerator),
    ));
    PostCommandService::new(repo.clone(), repo, slug_service, Arc::new(DummyClock))
}

fn create_command(title: &str, content: &str) -> CreatePostCommand {
    CreatePostCommand {
        title: title.into(),
        content: content.into(),
        excerpt: None,
        cover_image: None,
        tags: vec![],
    }
}

#[tokio::test]
async fn create_derives_slug_excerpt_and_authorship() {
    let repo = Arc::new(InMemoryPostRepo::new());
    let svc = service(repo.clone());
    let author = authenticated(UserId::generate(), "alice");

    let dto = svc
        .create_post(&author, create_command("My First Post", "Hello there."))
        .await
        .unwrap();

    assert_eq!(dto.slug, "my-first-post");
    assert_eq!(dto.excerpt, "Hello there....");
    assert_eq!(dto.author_id, author.id.as_uuid());
}

#[tokio::test]
async fn duplicate_titles_get_suffixed_slugs() {
    let repo = Arc::new(InMemoryPostRepo::new());
    let svc = service(repo.clone());
    let author = authenticated(UserId::generate(), "alice");

    let first = svc
        .create_post(&author, create_command("My Post", "one"))
        .await
        .unwrap();
    let second = svc
        .create_post(&author, create_command("My Post", "two"))
        .await
        .unwrap();

    assert_eq!(first.slug, "my-post");
    assert_eq!(second.slug, "my-post-1");
}

#[tokio::test]
async fn blank_supplied_excerpt_falls_back_to_derived() {
    let repo = Arc::new(InMemoryPostRepo::new());
    let svc = service(repo.clone());
    let author = authenticated(UserId::generate(), "alice");

    let dto = svc
        .create_post(
            &author,
            CreatePostCommand {
                title: "Post".into(),
                content: "Body text".into(),
                excerpt: Some("   ".into()),
                cover_image: None,
                tags: vec![],
            },
        )
        .await
        .unwrap();

    assert_eq!(dto.excerpt, "Body text...");
}

#[tokio::test]
async fn create_records_tag_rows() {
    let repo = Arc::new(InMemoryPostRepo::new());
    let svc = service(repo.clone());
    let author = authenticated(UserId::generate(), "alice");

    svc.create_post(
        &author,
        CreatePostCommand {
            title: "Tagged".into(),
            content: "body".into(),
            excerpt: None,
            cover_image: None,
            tags: vec!["rust".into(), "web".into()],
        },
    )
    .await
    .unwrap();

    assert_eq!(repo.tag_rows(), vec!["rust".to_owned(), "web".to_owned()]);
}

#[tokio::test]
async fn update_retitles_and_reslugs() {
    let repo = Arc::new(InMemoryPostRepo::new());
    let svc = service(repo.clone());
    let author = authenticated(UserId::generate(), "alice");

    let created = svc
        .create_post(&author, create_command("Old Title", "body"))
        .await
        .unwrap();

    let updated = svc
        .update_post(
            &author,
            UpdatePostCommand {
                id: created.id.to_string(),
                title: Some("New Title".into()),
                content: None,
                excerpt: None,
                cover_image: None,
                tags: None,
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.title, "New Title");
    assert_eq!(updated.slug, "new-title");
    assert_eq!(updated.content, "body");
}

#[tokio::test]
async fn update_replaces_the_whole_tag_set() {
    let repo = Arc::new(InMemoryPostRepo::new());
    let svc = service(repo.clone());
    let author = authenticated(UserId::generate(), "alice");

    let created = svc
        .create_post(
            &author,
            CreatePostCommand {
                title: "Tagged".into(),
                content: "body".into(),
                excerpt: None,
                cover_image: None,
                tags: vec!["rust".into(), "web".into()],
            },
        )
        .await
        .unwrap();

    let updated = svc
        .update_post(
            &author,
            UpdatePostCommand {
                id: created.id.to_string(),
                title: None,
                content: None,
                excerpt: None,
                cover_image: None,
                tags: Some(vec!["async".into()]),
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.tags, vec!["async".to_owned()]);
    // replaced tag names stay in the tag table
    assert!(repo.tag_rows().contains(&"rust".to_owned()));
}

#[tokio::test]
async fn foreign_posts_look_absent_to_update_and_delete() {
    let repo = Arc::new(InMemoryPostRepo::new());
    let svc = service(repo.clone());
    let owner = authenticated(UserId::generate(), "alice");
    let intruder = authenticated(UserId::generate(), "mallory");

    let created = svc
        .create_post(&owner, create_command("Owned", "body"))
        .await
        .unwrap();

    let update_err = svc
        .update_post(
            &intruder,
            UpdatePostCommand {
                id: created.id.to_string(),
                title: Some("Stolen".into()),
                content: None,
                excerpt: None,
                cover_image: None,
                tags: None,
            },
        )
        .await
        .unwrap_err();
    let delete_err = svc
        .delete_post(
            &intruder,
            DeletePostCommand {
                id: created.id.to_string(),
            },
        )
        .await
        .unwrap_err();
    let missing_err = svc
        .delete_post(
            &owner,
            DeletePostCommand {
                id: uuid::Uuid::new_v4().to_string(),
            },
        )
        .await
        .unwrap_err();

    // ownership failures must be indistinguishable from a missing post
    for err in [&update_err, &delete_err, &missing_err] {
        match err {
            ApplicationError::NotFound(msg) => assert_eq!(msg, "post not found"),
            other => panic!("expected not found, got {other:?}"),
        }
    }
    assert_eq!(repo.len(), 1);
}

#[tokio::test]
async fn delete_removes_the_post_but_keeps_tag_rows() {
    let repo = Arc::new(InMemoryPostRepo::new());
    let svc = service(repo.clone());
    let author = authenticated(UserId::generate(), "alice");

    let created = svc
        .create_post(
            &author,
            CreatePostCommand {
                title: "Doomed".into(),
                content: "body".into(),
                excerpt: None,
                cover_image: None,
                tags: vec!["rust".into()],
            },
        )
        .await
        .unwrap();

    svc.delete_post(
        &author,
        DeletePostCommand {
            id: created.id.to_string(),
        },
    )
    .await
    .unwrap();

    assert_eq!(repo.len(), 0);
    assert_eq!(repo.tag_rows(), vec!["rust".to_owned()]);
}

// src/application/commands/posts/delete.rs
use super::service::PostCommandService;
use crate::{
    application::{dto::AuthenticatedUser, error::ApplicationResult},
    domain::post::PostId,
};

pub struct DeletePostCommand {
    pub id: String,
}

impl PostCommandService {
    /// Owner-only; tag rows survive the deletion of their last post, only
    /// the join rows go away with the post.
    pub async fn delete_post(
        &self,
        actor: &AuthenticatedUser,
        command: DeletePostCommand,
    ) -> ApplicationResult<()> {
        let id = PostId::parse(&command.id)?;
        let post = self.find_owned_post(actor, id).await?;
        self.write_repo.delete(post.id).await?;
        Ok(())
    }
}

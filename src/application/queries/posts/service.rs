use std::sync::Arc;

use crate::domain::post::PostReadRepository;

pub struct PostQueryService {
    pub(super) read_repo: Arc<dyn PostReadRepository>,
}

impl PostQueryService {
    pub fn new(read_repo: Arc<dyn PostReadRepository>) -> Self {
        Self { read_repo }
    }
}

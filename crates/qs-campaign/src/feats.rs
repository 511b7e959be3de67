//! The feat catalog.

use qs_core::{Feat, FeatId, FeatKind};

use crate::backend::Backend;
use crate::campaign::Campaign;
use crate::error::{CampaignError, CampaignResult};

impl<B: Backend> Campaign<B> {
    /// Add a feat or class feature. Returns its id.
    pub fn add_feat(
        &mut self,
        title: &str,
        description: &str,
        kind: FeatKind,
    ) -> CampaignResult<FeatId> {
        let title = title.trim();
        if title.is_empty() {
            return Err(CampaignError::Validation(
                "feat title must not be empty".into(),
            ));
        }
        let description = description.trim();
        self.transaction("add feat", |db| {
            Ok(db
                .feats
                .insert_with(|id| Feat::new(id, title, description, kind)))
        })
    }

    /// Remove a feat.
    pub fn delete_feat(&mut self, id: FeatId) -> CampaignResult<()> {
        self.transaction("delete feat", |db| {
            db.feats
                .remove(id)
                .map(|_| ())
                .ok_or(CampaignError::FeatNotFound(id))
        })
    }

    /// All feats, oldest first.
    pub fn feats(&self) -> Vec<&Feat> {
        let mut feats: Vec<&Feat> = self.database().feats.iter().collect();
        feats.sort_by_key(|f| (f.created_at, f.id));
        feats
    }
}

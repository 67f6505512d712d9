//! Campaign repository.

use chrono::NaiveDate;

use loyalty_core::forms::ValidCampaign;
use loyalty_core::records::Campaign;
use loyalty_core::scope::ViewScope;
use loyalty_core::{Brand, CampaignId, next_id};

use super::{Store, prepend};

/// Repository for marketing campaigns. Campaigns are only ever added.
pub struct CampaignRepository<'a> {
    store: &'a Store,
}

impl<'a> CampaignRepository<'a> {
    #[must_use]
    pub const fn new(store: &'a Store) -> Self {
        Self { store }
    }

    pub async fn list(&self, scope: &ViewScope) -> Vec<Campaign> {
        let tables = self.store.read().await;
        scope.filter(&tables.campaigns).into_iter().cloned().collect()
    }

    pub async fn create(&self, campaign: ValidCampaign, brand: Brand, today: NaiveDate) -> Campaign {
        let mut tables = self.store.write().await;
        let id: CampaignId = next_id(tables.campaigns.iter().map(|c| c.id));
        let campaign = campaign.into_campaign(id, brand, today);
        prepend(&mut tables.campaigns, campaign.clone());
        campaign
    }
}

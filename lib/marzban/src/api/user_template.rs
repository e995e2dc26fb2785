use crate::models::{UserTemplate, UserTemplateRequest, UserTemplatesQuery};
use crate::{Endpoint, HttpClient, MarzbanClient, RequestIntent, Result};

impl<C: HttpClient> MarzbanClient<C> {
    /// Lists user templates.
    pub async fn user_templates(&self, query: &UserTemplatesQuery) -> Result<Vec<UserTemplate>> {
        self.fetch(RequestIntent::get(Endpoint::UserTemplate).query(query)?)
            .await
    }

    /// Creates a user template.
    pub async fn add_user_template(&self, template: &UserTemplateRequest) -> Result<UserTemplate> {
        self.fetch(RequestIntent::post(Endpoint::UserTemplate).json(template)?)
            .await
    }

    /// One user template.
    pub async fn user_template(&self, template_id: u64) -> Result<UserTemplate> {
        self.fetch(RequestIntent::get(Endpoint::UserTemplateById { template_id }))
            .await
    }

    /// Modifies a user template.
    pub async fn modify_user_template(
        &self,
        template_id: u64,
        template: &UserTemplateRequest,
    ) -> Result<UserTemplate> {
        self.fetch(
            RequestIntent::put(Endpoint::UserTemplateById { template_id }).json(template)?,
        )
        .await
    }

    /// Removes a user template.
    pub async fn remove_user_template(&self, template_id: u64) -> Result<()> {
        self.fetch_unit(RequestIntent::delete(Endpoint::UserTemplateById { template_id }))
            .await
    }
}

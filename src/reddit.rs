//! reddit feed client.
//!
//! Uses application-only OAuth (client credentials) and reads a subreddit
//! listing page by page until `limit` posts are collected or the listing
//! ends.

use async_trait::async_trait;
use reqwest::{Client, header::USER_AGENT};

use crate::{
    Res,
    catalog::Feed,
    config::RedditSettings,
    types::{Listing, RawPost, RedditAccessToken, SortMode},
    utils,
};

const TOKEN_URL: &str = "https://www.reddit.com/api/v1/access_token";
const API_URL: &str = "https://oauth.reddit.com";
const PAGE_LIMIT: u32 = 100;

pub struct RedditFeed {
    client: Client,
    settings: RedditSettings,
    user_agent: String,
}

impl RedditFeed {
    pub fn new(settings: RedditSettings) -> Self {
        let user_agent = utils::user_agent(&settings.username);
        Self {
            client: Client::new(),
            settings,
            user_agent,
        }
    }

    pub fn subreddit(&self) -> &str {
        &self.settings.subreddit
    }

    async fn access_token(&self) -> Res<String> {
        let response = self
            .client
            .post(TOKEN_URL)
            .header(USER_AGENT, &self.user_agent)
            .basic_auth(&self.settings.client_id, Some(&self.settings.client_secret))
            .form(&[("grant_type", "client_credentials")])
            .send()
            .await?
            .error_for_status()?;

        Ok(response.json::<RedditAccessToken>().await?.access_token)
    }

    async fn page(
        &self,
        token: &str,
        sort: SortMode,
        limit: u32,
        after: Option<&str>,
    ) -> Res<Listing> {
        let mut query = vec![("limit", limit.to_string()), ("raw_json", "1".to_string())];
        if matches!(sort, SortMode::Top | SortMode::Controversial) {
            query.push(("t", "all".to_string()));
        }
        if let Some(after) = after {
            query.push(("after", after.to_string()));
        }

        let url = format!(
            "{api}/r/{subreddit}/{sort}",
            api = API_URL,
            subreddit = self.settings.subreddit,
            sort = sort.endpoint()
        );

        let response = self
            .client
            .get(&url)
            .header(USER_AGENT, &self.user_agent)
            .bearer_auth(token)
            .query(&query)
            .send()
            .await?
            .error_for_status()?;

        Ok(response.json::<Listing>().await?)
    }
}

#[async_trait]
impl Feed for RedditFeed {
    async fn list_posts(&self, sort: SortMode, limit: u32) -> Res<Vec<RawPost>> {
        let token = self.access_token().await?;
        let mut posts: Vec<RawPost> = Vec::new();
        let mut after: Option<String> = None;

        while (posts.len() as u32) < limit {
            let remaining = limit - posts.len() as u32;
            let listing = self
                .page(&token, sort, remaining.min(PAGE_LIMIT), after.as_deref())
                .await?;

            let fetched = listing.data.children.len();
            posts.extend(
                listing
                    .data
                    .children
                    .into_iter()
                    .map(|child| child.data)
                    .take(remaining as usize),
            );

            after = listing.data.after;
            if fetched == 0 || after.is_none() {
                break;
            }
        }

        Ok(posts)
    }
}

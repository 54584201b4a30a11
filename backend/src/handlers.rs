use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Json,
};
use pulsefeed_shared::query::{featured_articles, filter_articles, flagged_trending_articles, ArticleFilter};
use pulsefeed_shared::search::{search_articles as run_search, suggestions, SearchFilter};
use pulsefeed_shared::trending::{
    analytics_for, rank_articles, topics_for, RankedArticle, Timeframe, TrendingAnalytics,
    TrendingTopic,
};
use pulsefeed_shared::{Article, ArticleSummary, Category, User};
use serde::{Deserialize, Serialize};

use crate::markdown::render_markdown;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ArticleQuery {
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub featured: Option<bool>,
    #[serde(default)]
    pub trending: Option<bool>,
    #[serde(default)]
    pub limit: Option<usize>,
    #[serde(default)]
    pub offset: Option<usize>,
}

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    pub q: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub limit: Option<usize>,
}

#[derive(Debug, Deserialize)]
pub struct SuggestionQuery {
    #[serde(default)]
    pub q: String,
}

#[derive(Debug, Deserialize)]
pub struct TimeframeQuery {
    #[serde(default)]
    pub timeframe: Option<Timeframe>,
}

#[derive(Debug, Deserialize)]
pub struct TrendingArticlesQuery {
    #[serde(default)]
    pub timeframe: Option<Timeframe>,
    #[serde(default)]
    pub limit: Option<usize>,
}

#[derive(Debug, Deserialize)]
pub struct SignInRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct SignUpRequest {
    pub email: String,
    pub password: String,
    pub name: String,
}

#[derive(Debug, Serialize)]
pub struct ArticleListResponse {
    pub articles: Vec<ArticleSummary>,
    pub total: usize,
}

/// Full article plus its body rendered to HTML.
#[derive(Debug, Serialize)]
pub struct ArticleDetail {
    #[serde(flatten)]
    pub article: Article,
    pub content_html: String,
}

#[derive(Debug, Serialize)]
pub struct CategoriesResponse {
    pub categories: Vec<Category>,
    pub total: usize,
}

#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub results: Vec<ArticleSummary>,
    pub total: usize,
    pub query: String,
}

#[derive(Debug, Serialize)]
pub struct SuggestionsResponse {
    pub suggestions: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct RecentSearchesResponse {
    pub searches: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct TopicsResponse {
    pub topics: Vec<TrendingTopic>,
    pub timeframe: Timeframe,
}

#[derive(Debug, Serialize)]
pub struct TrendingArticlesResponse {
    pub articles: Vec<RankedArticle>,
    pub total: usize,
    pub timeframe: Timeframe,
}

#[derive(Debug, Serialize)]
pub struct SessionResponse {
    pub user: Option<User>,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: u16,
}

type ApiError = (StatusCode, Json<ErrorResponse>);

const DEFAULT_TIMEFRAME: Timeframe = Timeframe::OneDay;

pub async fn list_articles(
    State(state): State<AppState>,
    Query(query): Query<ArticleQuery>,
) -> Json<ArticleListResponse> {
    let articles = state.catalog.articles().await;
    let filter = ArticleFilter {
        category: query.category,
        featured: query.featured,
        trending: query.trending,
        limit: query.limit,
        offset: query.offset,
    };
    let matched = filter_articles(&articles, state.catalog.categories(), &filter);

    Json(ArticleListResponse {
        total: matched.len(),
        articles: matched.into_iter().map(ArticleSummary::from).collect(),
    })
}

pub async fn list_featured(State(state): State<AppState>) -> Json<ArticleListResponse> {
    let articles = state.catalog.articles().await;
    let matched = featured_articles(&articles, state.catalog.categories());

    Json(ArticleListResponse {
        total: matched.len(),
        articles: matched.into_iter().map(ArticleSummary::from).collect(),
    })
}

pub async fn list_flagged_trending(State(state): State<AppState>) -> Json<ArticleListResponse> {
    let articles = state.catalog.articles().await;
    let matched = flagged_trending_articles(&articles, state.catalog.categories());

    Json(ArticleListResponse {
        total: matched.len(),
        articles: matched.into_iter().map(ArticleSummary::from).collect(),
    })
}

pub async fn get_article(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<ArticleDetail>, ApiError> {
    match state.catalog.article_by_slug(&slug).await {
        Some(article) => {
            let content_html = render_markdown(&article.content);
            Ok(Json(ArticleDetail {
                article,
                content_html,
            }))
        },
        None => Err(not_found("Article not found")),
    }
}

pub async fn list_categories(State(state): State<AppState>) -> Json<CategoriesResponse> {
    let categories = state.catalog.categories().to_vec();
    Json(CategoriesResponse {
        total: categories.len(),
        categories,
    })
}

pub async fn get_category(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<Category>, ApiError> {
    match state.catalog.category_by_slug(&slug) {
        Some(category) => Ok(Json(category.clone())),
        None => Err(not_found("Category not found")),
    }
}

pub async fn search(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> Json<SearchResponse> {
    let keyword = query.q.trim();
    if keyword.is_empty() {
        return Json(SearchResponse {
            results: vec![],
            total: 0,
            query: query.q,
        });
    }

    let articles = state.catalog.articles().await;
    let filter = SearchFilter {
        category: query.category,
        limit: query.limit,
    };
    let results = run_search(&articles, state.catalog.categories(), keyword, &filter);

    // History persistence failures shouldn't fail the search itself.
    if let Err(err) = state.recent_searches.write().await.record(keyword) {
        tracing::warn!("failed to record recent search: {err}");
    }

    Json(SearchResponse {
        total: results.len(),
        results: results.into_iter().map(ArticleSummary::from).collect(),
        query: query.q,
    })
}

pub async fn search_suggestions(Query(query): Query<SuggestionQuery>) -> Json<SuggestionsResponse> {
    Json(SuggestionsResponse {
        suggestions: suggestions(&query.q),
    })
}

pub async fn recent_searches(State(state): State<AppState>) -> Json<RecentSearchesResponse> {
    Json(RecentSearchesResponse {
        searches: state.recent_searches.read().await.terms().to_vec(),
    })
}

pub async fn trending_topics(Query(query): Query<TimeframeQuery>) -> Json<TopicsResponse> {
    let timeframe = query.timeframe.unwrap_or(DEFAULT_TIMEFRAME);
    let topics = topics_for(timeframe, &mut rand::thread_rng());
    Json(TopicsResponse { topics, timeframe })
}

pub async fn trending_articles(
    State(state): State<AppState>,
    Query(query): Query<TrendingArticlesQuery>,
) -> Json<TrendingArticlesResponse> {
    let timeframe = query.timeframe.unwrap_or(DEFAULT_TIMEFRAME);
    let articles = state.catalog.articles().await;
    let ranked = rank_articles(&articles, timeframe, query.limit, chrono::Utc::now());

    Json(TrendingArticlesResponse {
        total: ranked.len(),
        articles: ranked,
        timeframe,
    })
}

pub async fn trending_analytics(Query(query): Query<TimeframeQuery>) -> Json<TrendingAnalytics> {
    let timeframe = query.timeframe.unwrap_or(DEFAULT_TIMEFRAME);
    Json(analytics_for(timeframe, &mut rand::thread_rng()))
}

pub async fn sign_in(
    State(state): State<AppState>,
    Json(request): Json<SignInRequest>,
) -> Result<Json<User>, ApiError> {
    state
        .sessions
        .sign_in(&request.email, &request.password)
        .await
        .map(Json)
        .map_err(|err| bad_request(err.to_string()))
}

pub async fn sign_up(
    State(state): State<AppState>,
    Json(request): Json<SignUpRequest>,
) -> Result<Json<User>, ApiError> {
    state
        .sessions
        .sign_up(&request.email, &request.password, &request.name)
        .await
        .map(Json)
        .map_err(|err| bad_request(err.to_string()))
}

pub async fn sign_out(State(state): State<AppState>) -> StatusCode {
    state.sessions.sign_out().await;
    StatusCode::NO_CONTENT
}

pub async fn current_user(State(state): State<AppState>) -> Json<SessionResponse> {
    Json(SessionResponse {
        user: state.sessions.current().await,
    })
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        service: "PulseFeed API",
    })
}

fn not_found(message: &str) -> ApiError {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse {
            error: message.to_string(),
            code: 404,
        }),
    )
}

fn bad_request(message: String) -> ApiError {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse {
            error: message,
            code: 400,
        }),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_state(dir: &tempfile::TempDir) -> AppState {
        AppState::new(dir.path()).expect("build state")
    }

    #[tokio::test]
    async fn list_articles_applies_filters_and_envelope() {
        let dir = tempfile::tempdir().expect("tempdir");
        let state = test_state(&dir);

        let Json(all) = list_articles(
            State(state.clone()),
            Query(ArticleQuery {
                category: None,
                featured: None,
                trending: None,
                limit: None,
                offset: None,
            }),
        )
        .await;
        assert_eq!(all.total, all.articles.len());
        assert_eq!(all.total, 8);

        let Json(ai_only) = list_articles(
            State(state),
            Query(ArticleQuery {
                category: Some("ai".to_string()),
                featured: None,
                trending: None,
                limit: None,
                offset: None,
            }),
        )
        .await;
        assert!(ai_only.articles.iter().all(|a| a.category.slug == "ai"));
    }

    #[tokio::test]
    async fn get_article_renders_html_and_bumps_views() {
        let dir = tempfile::tempdir().expect("tempdir");
        let state = test_state(&dir);
        let slug = "quantum-ai-hybrid-systems-computing-revolution";

        let Json(first) = get_article(State(state.clone()), Path(slug.to_string()))
            .await
            .expect("article");
        assert!(first.content_html.contains("<h2>"));

        let Json(second) = get_article(State(state), Path(slug.to_string()))
            .await
            .expect("article");
        assert_eq!(second.article.views, first.article.views + 1);
    }

    #[tokio::test]
    async fn get_article_unknown_slug_is_404() {
        let dir = tempfile::tempdir().expect("tempdir");
        let state = test_state(&dir);
        let err = get_article(State(state), Path("nope".to_string())).await;
        let (status, Json(body)) = err.err().expect("error");
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body.code, 404);
    }

    #[tokio::test]
    async fn search_records_history_and_empty_query_short_circuits() {
        let dir = tempfile::tempdir().expect("tempdir");
        let state = test_state(&dir);

        let Json(empty) = search(
            State(state.clone()),
            Query(SearchQuery {
                q: "   ".to_string(),
                category: None,
                limit: None,
            }),
        )
        .await;
        assert_eq!(empty.total, 0);
        assert!(empty.results.is_empty());

        let Json(hits) = search(
            State(state.clone()),
            Query(SearchQuery {
                q: "quantum".to_string(),
                category: None,
                limit: None,
            }),
        )
        .await;
        assert!(hits.total > 0);

        let Json(recent) = recent_searches(State(state)).await;
        assert_eq!(recent.searches, ["quantum"]);
    }

    #[tokio::test]
    async fn trending_endpoints_default_to_24h() {
        let dir = tempfile::tempdir().expect("tempdir");
        let state = test_state(&dir);

        let Json(topics) = trending_topics(Query(TimeframeQuery { timeframe: None })).await;
        assert_eq!(topics.timeframe, Timeframe::OneDay);
        assert!(!topics.topics.is_empty());

        let Json(ranked) = trending_articles(
            State(state),
            Query(TrendingArticlesQuery {
                timeframe: None,
                limit: Some(3),
            }),
        )
        .await;
        assert_eq!(ranked.timeframe, Timeframe::OneDay);
        assert_eq!(ranked.articles.len(), 3);
    }

    #[tokio::test]
    async fn auth_round_trip() {
        let dir = tempfile::tempdir().expect("tempdir");
        let state = test_state(&dir);

        let err = sign_in(
            State(state.clone()),
            Json(SignInRequest {
                email: String::new(),
                password: "pw".to_string(),
            }),
        )
        .await;
        assert!(err.is_err());

        let Json(user) = sign_in(
            State(state.clone()),
            Json(SignInRequest {
                email: "ada@example.com".to_string(),
                password: "pw".to_string(),
            }),
        )
        .await
        .expect("sign in");
        assert_eq!(user.name, "ada");

        let Json(me) = current_user(State(state.clone())).await;
        assert!(me.user.is_some());

        assert_eq!(sign_out(State(state.clone())).await, StatusCode::NO_CONTENT);
        let Json(me) = current_user(State(state)).await;
        assert!(me.user.is_none());
    }
}

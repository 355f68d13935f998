//! Client rendering data prefetched from the story service

use story_service::domain::{LoginRequest, NewStory, RegisterRequest};
use story_service::{Config, StoryService};
use story_types::{ActionKind, Story, StoryId, User, UserId};
use web_client::views::{ProfileTab, Screen};
use web_client::{
    AuthState, ClientConfig, FeedSnapshot, ProfileSnapshot, StorySnapshot, View, ViewSources,
    WebClient,
};

const SECRET: &str = "k3P9xq2Lw8Zr5Tn1Vb7Yc4Hd6Jf0Gm2Qs8Ua5Ie3Ro9";
const PASSWORD: &str = "correct horse battery";

/// Snapshots taken from the service before a render pass
struct Prefetched {
    feed: FeedSnapshot,
    profile: Option<ProfileSnapshot>,
}

impl ViewSources for Prefetched {
    fn feed(&self, _viewer: &UserId) -> FeedSnapshot {
        self.feed.clone()
    }

    fn profile(&self, _viewer: &UserId) -> Option<ProfileSnapshot> {
        self.profile.clone()
    }

    fn story(&self, id: &StoryId, _viewer: &UserId) -> StorySnapshot {
        match self.feed.stories.iter().find(|story| &story.id == id) {
            Some(story) => StorySnapshot::ready(
                story.clone(),
                self.feed.liked_by.clone(),
                self.feed.saved_by.clone(),
            ),
            None => StorySnapshot::missing(),
        }
    }
}

fn service() -> StoryService {
    StoryService::new(&Config {
        app_env: "test".to_string(),
        jwt_secret: SECRET.to_string(),
        token_ttl_hours: 24,
    })
    .unwrap()
}

async fn register(service: &StoryService, username: &str) -> User {
    service
        .accounts
        .register_user(RegisterRequest {
            name: format!("{username} tester"),
            username: username.to_string(),
            email: format!("{username}@example.com"),
            password: PASSWORD.to_string(),
            bio: String::new(),
            avatar: String::new(),
        })
        .await
        .unwrap()
}

async fn publish(service: &StoryService, author: &User, title: &str) -> Story {
    service
        .feeds
        .publish_story(
            &author.id,
            NewStory {
                title: title.to_string(),
                content: format!("{title} body"),
                cover: None,
                tags: vec![],
            },
        )
        .await
        .unwrap()
}

async fn login(service: &StoryService, username: &str) -> String {
    service
        .accounts
        .login_user(LoginRequest {
            email: None,
            username: Some(username.to_string()),
            password: PASSWORD.to_string(),
        })
        .await
        .unwrap()
        .token
}

async fn prefetch(service: &StoryService, token: &str) -> Prefetched {
    let owner = service.accounts.current_user(token).await.unwrap();
    let stories = service.feeds.list_feeds().await;
    let ids: Vec<StoryId> = stories.iter().map(|story| story.id.clone()).collect();
    let liked_by = service.interactions.liked_by(&ids).await;
    let saved_by = service.interactions.saved_by(&ids).await;

    let profile = ProfileSnapshot::ready(
        owner.clone(),
        service.feeds.stories_by_author(&owner.id).await,
        service
            .feeds
            .stories_with_action(ActionKind::Like, &owner.id)
            .await,
        service
            .feeds
            .stories_with_action(ActionKind::Save, &owner.id)
            .await,
        liked_by.clone(),
        saved_by.clone(),
    )
    .unwrap();

    Prefetched {
        feed: FeedSnapshot::ready(stories, liked_by, saved_by).unwrap(),
        profile: Some(profile),
    }
}

#[tokio::test]
async fn test_feed_profile_and_story_from_service() {
    let service = service();
    let ada = register(&service, "ada").await;
    let bob = register(&service, "bob").await;
    let mine = publish(&service, &ada, "Mine").await;
    let theirs = publish(&service, &bob, "Theirs").await;
    service.interactions.like(&bob.id, &mine.id).await.unwrap();
    service.interactions.like(&ada.id, &theirs.id).await.unwrap();
    service.interactions.save(&ada.id, &theirs.id).await.unwrap();

    let token = login(&service, "ada").await;
    let mut client = WebClient::new(ClientConfig::default(), prefetch(&service, &token).await);
    assert_eq!(client.render(), View::Loading(web_client::views::Placeholder::Session));

    let state = client.resolve_session(Some(&token)).clone();
    assert_eq!(state.user().map(|u| &u.id), Some(&ada.id));

    let view = client.render();
    let cards = view.feed_cards();
    assert_eq!(cards.len(), 2);
    assert_eq!(cards[0].key, mine.id);
    assert!(!cards[0].is_liked());
    assert_eq!(cards[0].like_count(), 1);
    assert!(cards[1].is_liked());
    assert!(cards[1].is_saved());

    client.navigate("/profile");
    let view = client.render();
    let keys: Vec<&StoryId> = view.feed_cards().iter().map(|c| &c.key).collect();
    assert_eq!(keys, vec![&mine.id]);

    client.select_profile_tab(ProfileTab::Saved);
    let view = client.render();
    let keys: Vec<&StoryId> = view.feed_cards().iter().map(|c| &c.key).collect();
    assert_eq!(keys, vec![&theirs.id]);

    client.navigate(&format!("/story/{}", theirs.id));
    let View::Story(card) = client.render() else {
        panic!("expected story view");
    };
    assert_eq!(card.story.title, "Theirs");
    assert!(card.is_liked());
}

#[tokio::test]
async fn test_explore_searches_users() {
    let service = service();
    register(&service, "ada").await;
    register(&service, "bob").await;
    register(&service, "bobby").await;
    let token = login(&service, "ada").await;

    let mut client = WebClient::new(ClientConfig::default(), prefetch(&service, &token).await);
    client.sign_in(&token);
    client.navigate("/explore");

    let stale = client.handle_search("b").unwrap();
    let request = client.handle_search("BOB").unwrap();
    let users = service
        .accounts
        .search_users_by_username(&request.pattern())
        .await
        .unwrap();
    assert!(client.receive_search_results(&request, users));
    assert!(!client.receive_search_results(&stale, vec![]));

    let View::Explore(page) = client.render() else {
        panic!("expected explore page");
    };
    let usernames: Vec<&str> = page.cards.iter().map(|c| c.username.as_str()).collect();
    assert_eq!(usernames, vec!["bob", "bobby"]);

    client.handle_search("");
    let View::Explore(page) = client.render() else {
        panic!("expected explore page");
    };
    assert!(page.cards.is_empty());
}

#[tokio::test]
async fn test_removed_account_and_bad_tokens_land_on_login() {
    let service = service();
    let ada = register(&service, "ada").await;
    let token = login(&service, "ada").await;
    let sources = prefetch(&service, &token).await;

    let mut client = WebClient::new(ClientConfig::default(), sources);
    client.resolve_session(Some("not-a-token"));
    client.navigate("/");
    assert_eq!(client.render(), View::Screen(Screen::Login));
    assert_eq!(client.auth_state(), &AuthState::Unauthenticated);

    service.accounts.remove_user_by_id(&ada.id).await.unwrap();
    assert!(service.accounts.current_user(&token).await.is_err());
}

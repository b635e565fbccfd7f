mod common;

use common::TestEnvironment;
use mealie_client::client::recipes::RecipeSearchQuery;
use mealie_client::client::types::*;
use mealie_client::client::{CrudApi, ReadOnlyApi, RequestBody};
use pretty_assertions::assert_eq;
use reqwest::Method;
use serde_json::json;

fn household_json() -> serde_json::Value {
    json!({ "id": "h1", "name": "Home", "slug": "home", "groupId": "g1" })
}

#[tokio::test]
async fn test_household_listing_is_read_only_crud() {
    let env = TestEnvironment::new();
    env.transport
        .respond_json(json!({ "page": 1, "per_page": 10, "total": 1, "items": [household_json()] }));
    env.transport.respond_json(household_json());

    let page = env.client.households.get_all(1, 10, &()).await.unwrap();
    assert_eq!(page.items[0].slug, "home");
    let household = env.client.households.get_one("h1").await.unwrap();
    assert_eq!(household.group_id, "g1");

    let paths: Vec<String> = env.transport.requests().into_iter().map(|r| r.path).collect();
    assert_eq!(
        paths,
        vec![
            "/api/groups/households?page=1&perPage=10".to_string(),
            "/api/groups/households/h1".to_string(),
        ]
    );
}

#[tokio::test]
async fn test_current_user_household_endpoints() {
    let env = TestEnvironment::new();
    env.transport.respond_json(household_json());
    env.transport.respond_json(json!({ "recipeId": "r1", "lastMade": null }));
    env.transport.respond_json(json!({
        "totalRecipes": 12, "totalUsers": 2, "totalCategories": 3, "totalTags": 4, "totalTools": 5
    }));

    let household = env.client.households.get_current_user_household().await.unwrap();
    assert_eq!(household.name, "Home");
    let summary = env
        .client
        .households
        .get_current_user_household_recipe("soup")
        .await
        .unwrap();
    assert_eq!(summary.recipe_id, "r1");
    let stats = env.client.households.statistics().await.unwrap();
    assert_eq!(stats.total_tools, 5);

    let paths: Vec<String> = env.transport.requests().into_iter().map(|r| r.path).collect();
    assert_eq!(
        paths,
        vec![
            "/api/households/self".to_string(),
            "/api/households/self/recipes/soup".to_string(),
            "/api/households/statistics".to_string(),
        ]
    );
}

#[tokio::test]
async fn test_preferences_permissions_and_invitations() {
    let env = TestEnvironment::new();
    env.transport
        .respond_json(json!({ "id": "p1", "privateHousehold": true, "firstDayOfWeek": 1 }));
    env.transport.respond_json(json!({ "id": "u1", "email": "cook@example.com" }));
    env.transport.respond_json(json!({
        "token": "invite", "usesLeft": 3, "groupId": "g1", "householdId": "h1"
    }));

    let preferences = env
        .client
        .households
        .set_preferences(&UpdateHouseholdPreferences {
            private_household: true,
            first_day_of_week: 1,
            ..Default::default()
        })
        .await
        .unwrap();
    assert!(preferences.private_household);

    env.client
        .households
        .set_member_permissions(&SetPermissions {
            user_id: "u1".into(),
            can_invite: true,
            ..Default::default()
        })
        .await
        .unwrap();

    let invite = env
        .client
        .households
        .create_invitation(&CreateInviteToken { uses: 3 })
        .await
        .unwrap();
    assert_eq!(invite.uses_left, 3);

    let requests = env.transport.requests();
    assert_eq!(requests[0].method, Method::PUT);
    assert_eq!(requests[0].path, "/api/households/preferences");
    assert_eq!(requests[1].method, Method::PUT);
    assert_eq!(requests[1].path, "/api/households/permissions");
    let RequestBody::Json(body) = &requests[1].body else {
        panic!("expected json body");
    };
    assert_eq!(body["userId"], json!("u1"));
    assert_eq!(body["canInvite"], json!(true));
    assert_eq!(requests[2].method, Method::POST);
    assert_eq!(requests[2].path, "/api/households/invitations");
}

#[tokio::test]
async fn test_fetch_members_merges_params() {
    let env = TestEnvironment::new();
    env.transport
        .respond_json(json!({ "page": 1, "per_page": -1, "total": 0, "items": [] }));

    env.client
        .households
        .fetch_members(1, -1, &json!({ "orderBy": "username" }))
        .await
        .unwrap();

    assert_eq!(
        env.transport.last_request().path,
        "/api/households/members?orderBy=username&page=1&perPage=-1"
    );
}

#[tokio::test]
async fn test_admin_users_crud_and_unlock() {
    let env = TestEnvironment::new();
    let user = json!({ "id": "u1", "email": "cook@example.com", "admin": false });
    env.transport.respond_json(user.clone());
    env.transport.respond_json(user.clone());
    env.transport.respond_json(user);
    env.transport.respond_json(json!({ "unlocked": 2 }));
    env.transport.respond_json(json!({ "token": "reset" }));

    let created = env
        .client
        .admin_users
        .create_one(&UserIn {
            username: "cook".into(),
            full_name: "Cook".into(),
            email: "cook@example.com".into(),
            password: "secret".into(),
            ..Default::default()
        })
        .await
        .unwrap();
    env.client.admin_users.update_one(&created.id, &created).await.unwrap();
    env.client.admin_users.delete_one("u1").await.unwrap();
    let unlocked = env.client.admin_users.unlock_all_users(true).await.unwrap();
    assert_eq!(unlocked.unlocked, 2);
    let token = env
        .client
        .admin_users
        .generate_password_reset_token(&ForgotPassword {
            email: "cook@example.com".into(),
        })
        .await
        .unwrap();
    assert_eq!(token.token, "reset");

    let summary: Vec<(Method, String)> = env
        .transport
        .requests()
        .into_iter()
        .map(|r| (r.method, r.path))
        .collect();
    assert_eq!(
        summary,
        vec![
            (Method::POST, "/api/admin/users".to_string()),
            (Method::PUT, "/api/admin/users/u1".to_string()),
            (Method::DELETE, "/api/admin/users/u1".to_string()),
            (Method::POST, "/api/admin/users/unlock?force=true".to_string()),
            (Method::POST, "/api/admin/users/password-reset-token".to_string()),
        ]
    );
}

#[test_log::test(tokio::test)]
async fn test_explore_routes_are_scoped_to_group() {
    let env = TestEnvironment::new();
    env.transport.respond_json(json!({ "id": "r1", "slug": "soup" }));
    env.transport
        .respond_json(json!({ "page": 1, "per_page": 10, "total": 0, "items": [] }));
    env.transport.respond_json(json!({ "items": [] }));

    let explore = env.client.explore("family");
    assert_eq!(explore.group_slug(), "family");

    explore.get_one("soup").await.unwrap();
    explore
        .search(&RecipeSearchQuery {
            search: Some("stew".into()),
            ..Default::default()
        })
        .await
        .unwrap();
    let tools = vec!["pot".to_string()];
    explore
        .get_suggestions(&RecipeSuggestionQuery::default(), None, Some(&tools))
        .await
        .unwrap();

    let paths: Vec<String> = env.transport.requests().into_iter().map(|r| r.path).collect();
    assert_eq!(
        paths,
        vec![
            "/api/explore/groups/family/recipes/soup".to_string(),
            "/api/explore/groups/family/recipes?search=stew".to_string(),
            "/api/explore/groups/family/recipes/suggestions?tools=pot".to_string(),
        ]
    );
}

#[tokio::test]
async fn test_meal_plan_endpoints() {
    let env = TestEnvironment::new();
    let entry = json!({
        "id": 7, "date": "2024-05-06", "entryType": "dinner", "title": "", "text": "",
        "recipeId": "r1", "groupId": "g1", "userId": "u1", "householdId": "h1"
    });
    env.transport.respond_json(entry.clone());
    env.transport.respond_json(json!([entry.clone()]));
    env.transport.respond_json(entry);

    let date = chrono::NaiveDate::from_ymd_opt(2024, 5, 6).unwrap();
    let created = env
        .client
        .meal_plans
        .create_one(&CreatePlanEntry {
            date,
            entry_type: PlanEntryType::Dinner,
            title: String::new(),
            text: String::new(),
            recipe_id: Some("r1".into()),
        })
        .await
        .unwrap();
    assert_eq!(created.id, 7);
    assert_eq!(created.entry_type, PlanEntryType::Dinner);

    let today = env.client.meal_plans.get_today().await.unwrap();
    assert_eq!(today.len(), 1);
    env.client
        .meal_plans
        .set_random(&CreateRandomEntry {
            date,
            entry_type: PlanEntryType::Lunch,
        })
        .await
        .unwrap();

    let requests = env.transport.requests();
    assert_eq!(requests[0].path, "/api/households/mealplans");
    assert_eq!(
        requests[0].body,
        RequestBody::Json(json!({
            "date": "2024-05-06", "entryType": "dinner", "title": "", "text": "", "recipeId": "r1"
        }))
    );
    assert_eq!(requests[1].path, "/api/households/mealplans/today");
    assert_eq!(requests[2].path, "/api/households/mealplans/random");
    assert_eq!(
        requests[2].body,
        RequestBody::Json(json!({ "date": "2024-05-06", "entryType": "lunch" }))
    );
}

#[test_log::test(tokio::test)]
async fn test_meal_plan_rule_filter_string_matches_structured_filter() {
    let env = TestEnvironment::new();
    env.transport.respond_json(json!({
        "id": "rule1", "day": "monday", "entryType": "dinner",
        "queryFilterString": "tags.name IN [\"quick\"]",
        "groupId": "g1", "householdId": "h1",
        "queryFilter": { "parts": [{
            "attributeName": "tags.name", "relationalOperator": "IN", "value": ["quick"]
        }] }
    }));

    let filter = QueryFilterJSON {
        parts: vec![QueryFilterJSONPart {
            attribute_name: Some("tags.name".into()),
            relational_operator: Some(Relationship::Keyword(RelationalKeyword::In)),
            value: Some(FilterValue::List(vec!["quick".into()])),
            ..Default::default()
        }],
    };
    let rule = PlanRulesCreate::from_filter(PlanRulesDay::Monday, PlanRulesType::Dinner, &filter);

    let saved = env.client.meal_plan_rules.create_one(&rule).await.unwrap();

    assert_eq!(
        saved.query_filter.as_ref().map(|f| f.to_filter_string()),
        Some(saved.query_filter_string.clone())
    );
    assert_eq!(
        env.transport.last_request().body,
        RequestBody::Json(json!({
            "day": "monday", "entryType": "dinner", "queryFilterString": "tags.name IN [\"quick\"]"
        }))
    );
}

#[tokio::test]
async fn test_meal_plan_entry_type_defaults_to_breakfast() {
    let env = TestEnvironment::new();
    env.transport.respond_json(json!([{
        "id": 3, "date": "2024-05-07", "recipeId": null,
        "groupId": "g1", "userId": "u1", "householdId": "h1"
    }]));

    let today = env.client.meal_plans.get_today().await.unwrap();

    assert_eq!(today[0].entry_type, PlanEntryType::Breakfast);
    assert_eq!(PlanEntryType::default(), PlanEntryType::Breakfast);
}

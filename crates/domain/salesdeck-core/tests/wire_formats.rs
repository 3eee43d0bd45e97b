use salesdeck_core::{Article, Course, DataEnvelope, ListEnvelope, Pagination};

#[test]
fn course_list_envelope_parses() {
    let json = r#"{
        "status": "success",
        "results": 2,
        "pagination": { "total": 8, "page": 1, "pages": 2, "limit": 6 },
        "data": [
            {
                "_id": "65f0",
                "id": "closing-101",
                "title": "Closing 101",
                "description": "Ask for the sale.",
                "level": "Beginner",
                "duration": "3h",
                "modules": 4,
                "categories": [{ "_id": "c1", "name": "Closing", "slug": "closing" }]
            },
            { "_id": "65f1" }
        ]
    }"#;

    let env: ListEnvelope<Course> = serde_json::from_str(json).unwrap();
    assert_eq!(env.results, 2);
    assert_eq!(
        env.pagination,
        Pagination {
            total: 8,
            page: 1,
            pages: 2,
            limit: 6
        }
    );
    assert_eq!(env.data[0].route_id(), "closing-101");
    assert_eq!(env.data[0].categories[0].slug, "closing");
    assert_eq!(env.data[0].display_modules(), 4);
    // Missing `id` falls back to the object id for routing.
    assert_eq!(env.data[1].route_id(), "65f1");
}

#[test]
fn missing_course_fields_use_display_fallbacks() {
    let course: Course = serde_json::from_str(r#"{ "_id": "x", "title": "" }"#).unwrap();
    assert_eq!(course.display_title(), "Untitled Course");
    assert_eq!(course.display_description(), "No description available");
    assert_eq!(course.display_level(), "Beginner");
    assert_eq!(course.display_duration(), "Self-paced");
    assert_eq!(course.display_modules(), 0);
    assert_eq!(course.display_image(), "/images/placeholder.jpg");
}

#[test]
fn missing_article_fields_use_display_fallbacks() {
    let env: DataEnvelope<Article> =
        serde_json::from_str(r#"{ "status": "success", "data": { "id": "a1", "excerpt": "Short" } }"#)
            .unwrap();
    let article = env.data;
    assert_eq!(article.display_title(), "Untitled Article");
    assert_eq!(article.display_author(), "Anonymous");
    assert_eq!(article.display_date(), "No date");
    assert_eq!(article.display_body(), "Short");
}

#[test]
fn article_html_content_is_camel_case_on_the_wire() {
    let article: Article =
        serde_json::from_str(r#"{ "id": "a1", "htmlContent": "<p>Hi</p>" }"#).unwrap();
    assert_eq!(article.display_body(), "<p>Hi</p>");
}

#[test]
fn page_numbers_are_dense() {
    let p = Pagination {
        total: 61,
        page: 3,
        pages: 11,
        limit: 6,
    };
    assert_eq!(p.page_numbers(), (1..=11).collect::<Vec<_>>());
    assert_eq!(Pagination::empty(6).page_numbers(), vec![1]);
}

#[test]
fn null_and_mistyped_fields_fall_back() {
    let course: Course = serde_json::from_str(
        r#"{ "_id": null, "id": "a", "title": 42, "categories": null, "modules": "4" }"#,
    )
    .unwrap();
    assert_eq!(course.route_id(), "a");
    assert_eq!(course.display_title(), "Untitled Course");
    assert!(course.categories.is_empty());
    assert_eq!(course.display_modules(), 4);

    let course: Course =
        serde_json::from_str(r#"{ "id": "b", "modules": "lots", "level": null }"#).unwrap();
    assert_eq!(course.display_modules(), 0);
    assert_eq!(course.display_level(), "Beginner");

    let course: Course = serde_json::from_str(r#"{ "id": "c", "modules": -3 }"#).unwrap();
    assert_eq!(course.display_modules(), 0);
}

#[test]
fn null_category_fields_and_bad_entries_are_tolerated() {
    let article: Article = serde_json::from_str(
        r#"{ "id": "a1", "categories": [
            { "_id": "c1", "name": null, "slug": "mindset" },
            "not-a-category",
            null
        ] }"#,
    )
    .unwrap();
    assert_eq!(article.categories.len(), 1);
    assert_eq!(article.categories[0].slug, "mindset");
    assert_eq!(article.categories[0].name, "");
}

#[test]
fn one_bad_item_does_not_sink_the_page() {
    let json = r#"{
        "status": "success",
        "results": 3,
        "pagination": { "total": 3, "page": 1, "pages": 1, "limit": 6 },
        "data": [
            { "id": "good", "title": "Cold Calling" },
            { "id": null, "author": null, "categories": null },
            null
        ]
    }"#;

    let env: ListEnvelope<Article> = serde_json::from_str(json).unwrap();
    assert_eq!(env.data.len(), 2);
    assert_eq!(env.data[0].display_title(), "Cold Calling");
    assert_eq!(env.data[1].route_id(), "");
    assert_eq!(env.data[1].display_author(), "Anonymous");
}

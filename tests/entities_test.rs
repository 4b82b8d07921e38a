use antispam::{
    AsParams, Author, Clock, Comment, FixedClock, MetaRequest, ParamValue, Params, Request, Site,
    SystemClock, UserRecord,
};
use std::collections::BTreeSet;

fn params(pairs: &[(&str, &str)]) -> Params {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), ParamValue::from(*v)))
        .collect()
}

#[test]
fn test_request_to_params() {
    let req = Request::new(
        "127.0.0.2",
        "python/tests",
        Some("https://localmachine".to_string()),
    );

    assert_eq!(
        params(&[
            ("user_ip", "127.0.0.2"),
            ("user_agent", "python/tests"),
            ("referrer", "https://localmachine"),
        ]),
        req.as_params()
    );
}

#[test]
fn test_request_from_meta_with_referrer_quirk() -> anyhow::Result<()> {
    let meta: MetaRequest = [
        ("REMOTE_ADDR", "127.0.0.2"),
        ("HTTP_USER_AGENT", "python/tests"),
        ("HTTP_REFERRER", "referrer"),
    ]
    .into_iter()
    .collect();

    let req = Request::from_host_request(&meta)?;

    assert_eq!("127.0.0.2", req.ip_address);
    assert_eq!("python/tests", req.user_agent);
    assert_eq!(Some("referrer"), req.referrer.as_deref());
    Ok(())
}

#[test]
fn test_author_to_params() {
    let author = Author::new("Mike")
        .with_email("mike@mail.loc")
        .with_url("http://mike.example.com")
        .with_role("moderator");

    assert_eq!(
        params(&[
            ("comment_author", "Mike"),
            ("comment_author_email", "mike@mail.loc"),
            ("comment_author_url", "http://mike.example.com"),
            ("user_role", "moderator"),
        ]),
        author.as_params()
    );
}

#[test]
fn test_author_from_staff_user() {
    let user = UserRecord {
        first_name: "Mike".to_string(),
        last_name: "Hoff".to_string(),
        email: "mike@mail.loc".to_string(),
        is_staff: true,
    };

    let author = Author::from_host_user(&user);

    assert_eq!("Mike Hoff", author.name);
    assert_eq!(Some("mike@mail.loc"), author.email.as_deref());
    assert_eq!(None, author.url);
    assert_eq!(Some("administrator"), author.role.as_deref());
}

#[test]
fn test_site_to_params() {
    let site = Site::new("http://mike.example.com/", Some("it".to_string()));

    assert_eq!(
        params(&[("blog", "http://mike.example.com/"), ("blog_lang", "it")]),
        site.as_params()
    );
}

#[test]
fn test_comment_to_params() {
    let comment = Comment::builder("<my comment>")
        .comment_type("comment")
        .permalink("http://mike.example.com/comment-1/")
        .build(&SystemClock);

    let mut expected = params(&[
        ("comment_content", "<my comment>"),
        ("comment_type", "comment"),
        ("permalink", "http://mike.example.com/comment-1/"),
    ]);
    expected.insert(
        "comment_date".to_string(),
        ParamValue::Integer(comment.created.timestamp()),
    );

    assert_eq!(expected, comment.as_params());
}

#[test]
fn test_comment_with_fixed_clock_is_deterministic() {
    let clock = FixedClock::from_timestamp(1_600_000_000).unwrap();
    let first = Comment::builder("same").build(&clock);
    let second = Comment::builder("same").build(&clock);

    assert_eq!(first, second);
    assert_eq!(first.created, clock.now());
}

#[test]
fn test_comment_to_params_related_resources() {
    let author = Author::new("Mike")
        .with_email("mike@mail.loc")
        .with_url("http://mike.example.com")
        .with_role("moderator");
    let site = Site::new("http://mike.example.com/", Some("it".to_string()));

    let comment = Comment::builder("<my comment>")
        .author(author.clone())
        .site(site.clone())
        .build(&SystemClock);

    let keys: BTreeSet<String> = comment.as_params().into_keys().collect();
    let author_keys: BTreeSet<String> = author.as_params().into_keys().collect();
    let site_keys: BTreeSet<String> = site.as_params().into_keys().collect();

    assert!(
        author_keys.is_subset(&keys),
        "all author params should be in comment params"
    );
    assert!(
        site_keys.is_subset(&keys),
        "all site params should be in comment params"
    );
    assert_eq!(keys.len(), 2 + author_keys.len() + site_keys.len());
}

#[test]
fn test_params_are_usable_across_threads() {
    let comment = std::sync::Arc::new(
        Comment::builder("shared")
            .site(Site::new("http://mike.example.com/", None))
            .build(&SystemClock),
    );

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let comment = comment.clone();
            std::thread::spawn(move || comment.as_params())
        })
        .collect();

    let expected = comment.as_params();
    for handle in handles {
        assert_eq!(expected, handle.join().unwrap());
    }
}

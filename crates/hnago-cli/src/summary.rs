use hnago_core::{Comment, Item, Post, Timestamped};
use hnago_util_fmt::{AsFmtOption as _, RelativeTime};

fn age(item: &impl Timestamped, now_secs: f64) -> RelativeTime {
    RelativeTime::between(now_secs, item.time().as_secs() as f64)
}

pub fn summarize_post(post: &Post, now_secs: f64) -> String {
    format!(
        "post {} by {} ({} points, {} comments) {} ago: {} {}",
        post.id,
        post.by,
        post.score,
        post.kids().len(),
        age(post, now_secs),
        post.title,
        post.url.fmt_option(),
    )
}

pub fn summarize_comment(comment: &Comment, now_secs: f64) -> String {
    format!(
        "comment {} by {} on {} ({} replies) {} ago",
        comment.id,
        comment.by,
        comment.parent,
        comment.kids().len(),
        age(comment, now_secs),
    )
}

/// One-line description of an item, relative to `now_secs`
pub fn summarize(item: &Item, now_secs: f64) -> String {
    match item {
        Item::Post(post) => summarize_post(post, now_secs),
        Item::Comment(comment) => summarize_comment(comment, now_secs),
    }
}

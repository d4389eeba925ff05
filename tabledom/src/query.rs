use crate::element::{Content, Element, Tag};

/// Collect descendants of `root` (inclusive) whose class list contains
/// `token`, in document (pre-order) order. `tag` restricts the result to one
/// tag; `None` matches any tag. Token matching is case-sensitive and
/// whole-token: `"online"` does not match a query for `"on"`.
pub fn elements_by_class<'a>(root: &'a Element, token: &str, tag: Option<Tag>) -> Vec<&'a Element> {
    let mut result = Vec::new();
    collect_by_class(root, token, tag, &mut result);
    result
}

fn collect_by_class<'a>(
    element: &'a Element,
    token: &str,
    tag: Option<Tag>,
    result: &mut Vec<&'a Element>,
) {
    if tag.is_none_or(|t| t == element.tag) && element.classes.contains(token) {
        result.push(element);
    }
    if let Content::Children(children) = &element.content {
        for child in children {
            collect_by_class(child, token, tag, result);
        }
    }
}

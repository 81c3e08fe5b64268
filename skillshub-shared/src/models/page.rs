use serde::de::DeserializeOwned;
use serde_json::Value;

/// Canonical shape for every paginated list the frontend consumes.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page: u32,
    pub page_size: u32,
    pub total: u64,
}

impl<T> Default for Page<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            page: 1,
            page_size: 0,
            total: 0,
        }
    }
}

impl<T> Page<T> {
    /// Number of pages needed to show `total` items at `page_size`.
    #[must_use]
    pub fn page_count(&self) -> u32 {
        if self.page_size == 0 {
            return 0;
        }
        let total = u32::try_from(self.total).unwrap_or(u32::MAX);
        total.div_ceil(self.page_size)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Peels the `{code, message, data}` envelope, including the doubled
/// `data.data` nesting some endpoints produce, and returns the payload node.
#[must_use]
pub fn unwrap_data(mut value: Value) -> Value {
    loop {
        let is_envelope = value
            .as_object()
            .is_some_and(|obj| {
                obj.contains_key("data") && (obj.contains_key("code") || obj.contains_key("message"))
            });
        if !is_envelope {
            return value;
        }
        value = value
            .as_object_mut()
            .and_then(|obj| obj.remove("data"))
            .unwrap_or(Value::Null);
    }
}

impl<T: DeserializeOwned> Page<T> {
    /// Single normalization boundary for list responses.
    ///
    /// Accepts any of the shapes the collaborators emit: an enveloped or bare
    /// `{list, page, page_size, total}` object, the same with a `null` list,
    /// or a plain JSON array. Everything else is a decode error.
    pub fn from_value(value: Value) -> Result<Self, serde_json::Error> {
        let node = unwrap_data(value);

        if node.is_array() {
            let items: Vec<T> = serde_json::from_value(node)?;
            let count = items.len();
            return Ok(Self {
                total: count as u64,
                page_size: u32::try_from(count).unwrap_or(u32::MAX),
                items,
                page: 1,
            });
        }

        let Value::Object(mut obj) = node else {
            return Err(serde::de::Error::custom("expected list object or array"));
        };

        let items: Vec<T> = match obj.remove("list") {
            None | Some(Value::Null) => Vec::new(),
            Some(list) => serde_json::from_value(list)?,
        };
        let page = obj
            .get("page")
            .and_then(Value::as_u64)
            .and_then(|n| u32::try_from(n).ok())
            .unwrap_or(1);
        let page_size = obj
            .get("page_size")
            .and_then(Value::as_u64)
            .and_then(|n| u32::try_from(n).ok())
            .unwrap_or_else(|| u32::try_from(items.len()).unwrap_or(u32::MAX));
        let total = obj
            .get("total")
            .and_then(Value::as_u64)
            .unwrap_or(items.len() as u64);

        Ok(Self {
            items,
            page,
            page_size,
            total,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_bare_list_object() {
        let page: Page<u32> =
            Page::from_value(json!({"list": [1, 2, 3], "page": 2, "page_size": 3, "total": 9}))
                .expect("bare list object should normalize");
        assert_eq!(page.items, vec![1, 2, 3]);
        assert_eq!(page.page, 2);
        assert_eq!(page.page_count(), 3);
    }

    #[test]
    fn test_single_envelope() {
        let page: Page<u32> = Page::from_value(json!({
            "code": 0,
            "message": "ok",
            "data": {"list": [7], "page": 1, "page_size": 10, "total": 1}
        }))
        .expect("enveloped list should normalize");
        assert_eq!(page.items, vec![7]);
        assert_eq!(page.total, 1);
    }

    #[test]
    fn test_double_envelope() {
        // Some endpoints wrap the envelope twice.
        let page: Page<u32> = Page::from_value(json!({
            "code": 0,
            "message": "ok",
            "data": {
                "code": 0,
                "message": "ok",
                "data": {"list": [4, 5], "total": 2}
            }
        }))
        .expect("doubly enveloped list should normalize");
        assert_eq!(page.items, vec![4, 5]);
        assert_eq!(page.page, 1);
        assert_eq!(page.page_size, 2);
    }

    #[test]
    fn test_plain_array() {
        let page: Page<u32> =
            Page::from_value(json!([10, 20])).expect("plain array should normalize");
        assert_eq!(page.items, vec![10, 20]);
        assert_eq!(page.total, 2);
    }

    #[test]
    fn test_null_list_is_empty_page() {
        let page: Page<u32> = Page::from_value(json!({"list": null, "total": 0, "page": 1}))
            .expect("null list should normalize");
        assert!(page.is_empty());
        assert_eq!(page.page_count(), 0);
    }

    #[test]
    fn test_scalar_is_rejected() {
        assert!(Page::<u32>::from_value(json!(42)).is_err());
    }

    #[test]
    fn test_unwrap_data_leaves_plain_objects_alone() {
        let value = json!({"data": {"x": 1}});
        // No code/message sibling, so this is payload, not envelope.
        assert_eq!(unwrap_data(value.clone()), value);
    }
}

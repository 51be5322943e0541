use record_store::{Filter, ListPage, ListQuery, RecordStoreError};
use serde_json::Value;

use crate::domain::{
    models::{ListParams, Page},
    CrmError,
};

pub fn to_list_query(params: &ListParams) -> ListQuery {
    let mut query = ListQuery::new();
    query.page = params.page;
    query.per_page = params.per_page;
    query.expand = params.expand.clone();

    if !params.equals.is_empty() {
        let filter = params
            .equals
            .iter()
            .fold(Filter::new(), |filter, (field, value)| filter.and_eq(field, value));
        query = query.filter(filter);
    }

    query
}

pub fn to_domain_page(page: ListPage<Value>) -> Page {
    Page {
        page: page.page,
        per_page: page.per_page,
        total_items: page.total_items,
        total_pages: page.total_pages,
        items: page.items,
    }
}

pub fn map_record_store_error(err: RecordStoreError) -> CrmError {
    match err {
        RecordStoreError::Status { status, message } => CrmError::Upstream { status, message },
        RecordStoreError::ResponseError(message) | RecordStoreError::Other(message) => {
            CrmError::Unavailable(message)
        }
        RecordStoreError::ParsingError(message) => CrmError::InvalidRecord(message),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equality_conditions_become_a_filter() {
        let params = ListParams::new()
            .per_page(200)
            .where_eq("board_id", "b1")
            .expand("assignee_id");

        let pairs = to_list_query(&params).as_pairs();

        assert_eq!(
            pairs,
            vec![
                ("perPage", "200".to_string()),
                ("filter", "board_id='b1'".to_string()),
                ("expand", "assignee_id".to_string()),
            ]
        );
    }

    #[test]
    fn store_errors_keep_status_and_message() {
        let err = map_record_store_error(RecordStoreError::Status {
            status: 400,
            message: "Failed to create record.".into(),
        });
        assert!(matches!(
            err,
            CrmError::Upstream { status: 400, ref message } if message == "Failed to create record."
        ));

        let err =
            map_record_store_error(RecordStoreError::ResponseError("connection refused".into()));
        assert!(matches!(err, CrmError::Unavailable(_)));
    }
}

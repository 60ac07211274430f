use quarry_core::{
    driver::{OpaqueRow, Row},
    stmt::{Select, Selection},
    Error, Result,
};

use std::sync::Arc;

/// Materialize host proxy rows into plain rows keyed by the select's
/// projection list.
///
/// Proxy rows only support named property access, so the column set has to
/// come from the statement itself. Each output row carries exactly the
/// derived columns, in projection order.
pub(crate) fn unpack_rows(rows: &[Box<dyn OpaqueRow>], select: &Select) -> Result<Vec<Row>> {
    let columns: Arc<[String]> = selection_names(select)?.into();

    let mut out = Vec::with_capacity(rows.len());
    for row in rows {
        let mut values = Vec::with_capacity(columns.len());
        for column in columns.iter() {
            let value = row.get(column).ok_or_else(|| Error::MissingColumn {
                column: column.clone(),
            })?;
            values.push(value.clone());
        }
        out.push(Row::new(columns.clone(), values));
    }

    Ok(out)
}

/// Derive the result column names from a projection list.
///
/// Per item: a column reference is named after the column identifier (the
/// table qualifier does not participate), an aliased expression after its
/// alias. Everything else has no statically derivable name, because the
/// host offers no result-metadata API to recover one after the fact.
pub(crate) fn selection_names(select: &Select) -> Result<Vec<String>> {
    if select.selections.is_empty() {
        // Renders as `select *`; the column set is only knowable from
        // engine metadata.
        return Err(Error::SelectionNameUnresolvable { position: 1 });
    }

    select
        .selections
        .iter()
        .enumerate()
        .map(|(index, selection)| match selection {
            Selection::Column(column) => Ok(column.result_name().to_owned()),
            Selection::Aliased { alias, .. } => Ok(alias.as_str().to_owned()),
            Selection::Expr(_) | Selection::All => {
                Err(Error::SelectionNameUnresolvable { position: index + 1 })
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::ProxyRow;

    use quarry_core::stmt::{Expr, Value};

    fn proxy(pairs: Vec<(&str, Value)>) -> Box<dyn OpaqueRow> {
        Box::new(ProxyRow::new(pairs))
    }

    #[test]
    fn derives_names_from_columns_and_aliases() {
        let select = Select::new("t")
            .column("id")
            .column("t.value_a")
            .select_as(Expr::count_star(), "cnt");

        let names = selection_names(&select).unwrap();
        assert_eq!(names, vec!["id", "value_a", "cnt"]);
    }

    #[test]
    fn unaliased_expression_is_unresolvable() {
        let select = Select::new("t").column("id").select_expr(Expr::count_star());

        let err = selection_names(&select).unwrap_err();
        assert!(matches!(
            err,
            Error::SelectionNameUnresolvable { position: 2 }
        ));
    }

    #[test]
    fn star_projections_are_unresolvable() {
        let err = selection_names(&Select::new("t")).unwrap_err();
        assert!(matches!(err, Error::SelectionNameUnresolvable { .. }));

        let err = selection_names(&Select::new("t").select_all()).unwrap_err();
        assert!(matches!(err, Error::SelectionNameUnresolvable { .. }));
    }

    #[test]
    fn unpacks_exactly_the_descriptor_columns() {
        let select = Select::new("t").column("id").column("value_a");
        let rows = vec![
            proxy(vec![
                ("id", Value::Integer(1)),
                ("value_a", Value::Text("hey".into())),
                ("extra", Value::Integer(9)),
            ]),
            proxy(vec![
                ("id", Value::Integer(2)),
                ("value_a", Value::Text("sup".into())),
            ]),
        ];

        let plain = unpack_rows(&rows, &select).unwrap();
        assert_eq!(plain.len(), 2);
        assert_eq!(plain[0].columns(), ["id", "value_a"]);
        assert_eq!(plain[0].get("id"), Some(&Value::Integer(1)));
        assert_eq!(plain[0].get("extra"), None);
        assert_eq!(plain[1].get("value_a"), Some(&Value::Text("sup".into())));
    }

    #[test]
    fn missing_descriptor_column_fails() {
        let select = Select::new("t").column("id").column("value_a");
        let rows = vec![proxy(vec![("id", Value::Integer(1))])];

        let err = unpack_rows(&rows, &select).unwrap_err();
        assert!(matches!(err, Error::MissingColumn { column } if column == "value_a"));
    }
}

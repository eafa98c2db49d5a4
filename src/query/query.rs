/// Sort direction for the single order column a statement may carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

/// One equality filter. Conditions are AND-ed together by the executor.
#[derive(Debug, Clone, PartialEq)]
pub struct Condition {
    pub property: String,
    pub value: String,
}

/// Sort request for a single property.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderBy {
    pub property: String,
    pub direction: SortDirection,
}

/// Canonical read query, the only shape the execution layer ever sees.
/// Compilation fills it through the mutators below; an empty `properties`
/// list means every column.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Query {
    pub properties: Vec<String>,
    pub count: bool,
    pub conditions: Vec<Condition>,
    pub order_by: Option<OrderBy>,
    pub limit: Option<usize>,
    pub offset: Option<usize>,
}

impl Query {
    pub fn select_property(&mut self, property: &str) {
        self.properties.push(property.to_string());
    }

    pub fn set_count(&mut self) {
        self.count = true;
    }

    pub fn add_condition(&mut self, property: &str, value: &str) {
        self.conditions.push(Condition {
            property: property.to_string(),
            value: value.to_string(),
        });
    }

    pub fn set_order(&mut self, property: &str, direction: SortDirection) {
        self.order_by = Some(OrderBy {
            property: property.to_string(),
            direction,
        });
    }

    pub fn limit_to(&mut self, limit: usize) {
        self.limit = Some(limit);
    }

    pub fn offset_by(&mut self, offset: usize) {
        self.offset = Some(offset);
    }
}

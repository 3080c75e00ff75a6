/// One row of the campaign customer sheet. Rows missing a name or phone
/// number are dropped at parse time.
#[derive(Debug, Clone, PartialEq)]
pub struct Customer {
    pub name: String,
    pub phone: String,
}

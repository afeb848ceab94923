use serde::Serialize;

#[derive(Serialize)]
pub struct MakeFragmentContext<'a> {
    pub name: &'a String,
    pub date: &'a String,
    pub source_list: &'a String,
    pub dep_list: &'a String,
    pub define_list: &'a String,
    pub config_list: &'a String,
}

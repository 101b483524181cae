use std::fmt;

use super::dim;
use crate::presentation::view_models::{
    CreateView, ExampleListViewModel, HealthViewModel, TableListViewModel, ViewOptions,
};

impl CreateView for HealthViewModel {
    fn create_view<'a>(&'a self, options: ViewOptions) -> Box<dyn fmt::Display + 'a> {
        Box::new(HealthView {
            data: self,
            options,
        })
    }
}

struct HealthView<'a> {
    data: &'a HealthViewModel,
    options: ViewOptions,
}

impl<'a> fmt::Display for HealthView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "API:    {}", self.data.api_base)?;
        writeln!(f, "Status: {}", self.data.status)?;
        if !self.data.healthy {
            writeln!(f, "{}", dim("Expected status \"ok\"", self.options))?;
        }
        Ok(())
    }
}

impl CreateView for TableListViewModel {
    fn create_view<'a>(&'a self, _options: ViewOptions) -> Box<dyn fmt::Display + 'a> {
        Box::new(TableListView { data: self })
    }
}

struct TableListView<'a> {
    data: &'a TableListViewModel,
}

impl<'a> fmt::Display for TableListView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for table in &self.data.tables {
            writeln!(f, "{}", table)?;
        }
        Ok(())
    }
}

impl CreateView for ExampleListViewModel {
    fn create_view<'a>(&'a self, _options: ViewOptions) -> Box<dyn fmt::Display + 'a> {
        Box::new(ExampleListView { data: self })
    }
}

struct ExampleListView<'a> {
    data: &'a ExampleListViewModel,
}

impl<'a> fmt::Display for ExampleListView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, example) in self.data.examples.iter().enumerate() {
            writeln!(f, "{}. {}", i + 1, example)?;
        }
        Ok(())
    }
}

//! One migration per adjacent pair of schema versions.

mod common_settings;
mod content_fields;
mod divider_item;
mod flow_layout;
mod gis_field_id;
mod gis_item;
mod gis_labels;
mod goal_lines;
mod table_auto_expand;

pub use common_settings::CommonSettingsMigration;
pub use content_fields::ContentFieldMigration;
pub use divider_item::DividerItemMigration;
pub use flow_layout::FlowLayoutMigration;
pub use gis_field_id::GisFieldIdMigration;
pub use gis_item::GisItemMigration;
pub use gis_labels::GisLabelsMigration;
pub use goal_lines::GoalLineMigration;
pub use table_auto_expand::TableAutoExpandMigration;

use std::sync::Arc;

use super::traits::Migration;

/// Every built-in migration, oldest first.
pub fn all() -> Vec<Arc<dyn Migration>> {
    vec![
        Arc::new(DividerItemMigration),
        Arc::new(GoalLineMigration),
        Arc::new(CommonSettingsMigration),
        Arc::new(FlowLayoutMigration),
        Arc::new(GisItemMigration),
        Arc::new(GisLabelsMigration),
        Arc::new(GisFieldIdMigration),
        Arc::new(ContentFieldMigration),
        Arc::new(TableAutoExpandMigration),
    ]
}

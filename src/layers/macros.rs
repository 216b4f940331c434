/// Fills in the [`LayerTrait`](crate::layers::base::LayerTrait) accessors
/// of a layer that keeps its id, name, ordering and visibility in a
/// [`LayerProperties`](crate::layers::base::LayerProperties) field.
///
/// ```ignore
/// impl LayerTrait for Marker {
///     crate::layer_properties_accessors!(properties);
///
///     fn render(&self, context: &mut RenderContext, target: &str) -> Result<()> { ... }
/// }
/// ```
#[macro_export]
macro_rules! layer_properties_accessors {
    ($field:ident) => {
        fn id(&self) -> &str {
            &self.$field.id
        }

        fn name(&self) -> &str {
            &self.$field.name
        }

        fn layer_type(&self) -> $crate::layers::base::LayerType {
            self.$field.layer_type
        }

        fn is_visible(&self) -> bool {
            self.$field.visible
        }

        fn set_visible(&mut self, visible: bool) {
            self.$field.visible = visible;
        }

        fn z_index(&self) -> i32 {
            self.$field.z_index
        }

        fn set_z_index(&mut self, z_index: i32) {
            self.$field.z_index = z_index;
        }

        fn as_any(&self) -> &dyn ::std::any::Any {
            self
        }

        fn as_any_mut(&mut self) -> &mut dyn ::std::any::Any {
            self
        }
    };
}

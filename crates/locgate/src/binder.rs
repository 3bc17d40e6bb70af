//! The filter binder.
//!
//! Screens filter activations, resolves the current user's accessible
//! locations and binds them into the patient location filter.
//!
//! The two gates run in a fixed order. Super-users are screened first so
//! they are exempt from every filter the binder owns, not only the patient
//! filter. Filters the binder does not own are answered with
//! [`FilterVerdict::Engage`] so the host keeps evaluating other listeners.

use std::sync::Arc;

use locgate_access::{AccessSetResolver, ChildExpander, ResolverConfig};
use locgate_core::{AccessSet, User, LOCATION_UUIDS_PARAMETER, PATIENT_FILTER_PREFIX};
use locgate_store::{LocationRegistry, UserDirectory};

use crate::config::FilterConfig;
use crate::context::{DataFilterListener, FilterContext, FilterVerdict};

/// Username reported in diagnostics when nobody is authenticated.
const ANONYMOUS: &str = "<anonymous>";

/// Binds accessible location UUIDs into patient location filters.
///
/// Holds no state between activations; every activation re-reads the user,
/// the session and the location hierarchy.
pub struct FilterBinder<R, D> {
    /// Location hierarchy.
    registry: Arc<R>,
    /// Source of the current principal.
    directory: Arc<D>,
    /// Resolver settings derived from the configuration.
    resolver: ResolverConfig,
}

impl<R, D> FilterBinder<R, D>
where
    R: LocationRegistry,
    D: UserDirectory,
{
    /// Create a binder with the default configuration.
    pub fn new(registry: R, directory: D) -> Self {
        Self::from_shared(Arc::new(registry), Arc::new(directory), &FilterConfig::default())
    }

    /// Create a binder with an explicit configuration.
    pub fn with_config(registry: R, directory: D, config: &FilterConfig) -> Self {
        Self::from_shared(Arc::new(registry), Arc::new(directory), config)
    }

    /// Create a binder over collaborators the host already shares.
    pub fn from_shared(registry: Arc<R>, directory: Arc<D>, config: &FilterConfig) -> Self {
        Self {
            registry,
            directory,
            resolver: config.resolver_config(),
        }
    }

    pub fn registry(&self) -> &R {
        &self.registry
    }

    pub fn directory(&self) -> &D {
        &self.directory
    }

    /// Handle a filter activation.
    ///
    /// Never fails: missing users, missing configuration and unresolvable
    /// locations all narrow the bound set instead of erroring the query.
    pub fn on_filter_activation<C>(&self, context: &mut C) -> FilterVerdict
    where
        C: FilterContext + ?Sized,
    {
        let user = if self.directory.is_authenticated() {
            self.directory.current_authenticated_user()
        } else {
            None
        };

        if let Some(user) = user.as_ref().filter(|u| u.is_super_user()) {
            tracing::trace!(
                username = %user.username(),
                "skipping patient location filter for super user"
            );
            return FilterVerdict::Skip;
        }

        if !self.supports(context.filter_name()) {
            return FilterVerdict::Engage;
        }

        tracing::trace!(
            username = %username(user.as_ref()),
            filter = %context.filter_name(),
            "enabling location-based patient filter"
        );

        let set = self.access_set_for(user.as_ref());
        context.set_parameter(LOCATION_UUIDS_PARAMETER, set);

        FilterVerdict::Engage
    }

    /// Whether `filter_name` is a patient location filter.
    pub fn supports(&self, filter_name: &str) -> bool {
        filter_name.starts_with(PATIENT_FILTER_PREFIX)
    }

    /// Resolve and expand the locations `user` may see.
    ///
    /// `None` and users with nothing configured both yield the empty set.
    ///
    /// The session tier always reads the directory's active session, never
    /// `user`. Passing a user other than the signed-in one therefore pairs
    /// that user's configured list and privileges with the signed-in user's
    /// session location.
    pub fn access_set_for(&self, user: Option<&User>) -> AccessSet {
        let registry: &R = &self.registry;
        let directory: &D = &self.directory;
        let name = username(user);

        let seeds = AccessSetResolver::new(registry, directory, &self.resolver)
            .resolve(user)
            .map(|resolution| resolution.uuids)
            .unwrap_or_default();

        if seeds.is_empty() {
            tracing::warn!(
                username = %name,
                "User {} has no location configured. Patient results will be empty.",
                name
            );
            return AccessSet::new();
        }

        let set = ChildExpander::new(registry).expand(seeds);
        tracing::debug!(
            username = %name,
            locations = ?set,
            "final accessible patient locations (including children)"
        );
        set
    }
}

impl<R, D> DataFilterListener for FilterBinder<R, D>
where
    R: LocationRegistry,
    D: UserDirectory,
{
    fn on_enable_filter(&self, context: &mut dyn FilterContext) -> FilterVerdict {
        self.on_filter_activation(context)
    }

    fn supports(&self, filter_name: &str) -> bool {
        FilterBinder::supports(self, filter_name)
    }
}

fn username(user: Option<&User>) -> &str {
    user.map(User::username).unwrap_or(ANONYMOUS)
}

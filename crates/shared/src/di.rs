use crate::{
    abstract_trait::{DynAuthService, DynHashing, DynJwtService, DynKitchenService},
    repository::Repositories,
    service::{
        AuthService, AuthServiceDeps, KitchenService, KitchenServiceDeps, OrderService,
        OrderServiceDeps, ProductService, ProductServiceDeps, TableService, TableServiceDeps,
    },
};
use prometheus_client::registry::Registry;
use std::{fmt, sync::Arc};

#[derive(Clone)]
pub struct DependenciesInject {
    pub auth_service: DynAuthService,
    pub table_service: TableService,
    pub product_service: ProductService,
    pub order_service: OrderService,
    pub kitchen_service: DynKitchenService,
}

impl fmt::Debug for DependenciesInject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DependenciesInject")
            .field("auth_service", &"<AuthService>")
            .field("table_service", &"<TableService>")
            .field("product_service", &"<ProductService>")
            .field("order_service", &"<OrderService>")
            .field("kitchen_service", &"<KitchenService>")
            .finish()
    }
}

#[derive(Clone)]
pub struct DependenciesInjectDeps {
    pub repositories: Repositories,
    pub hash: DynHashing,
    pub jwt_config: DynJwtService,
}

impl DependenciesInject {
    /// Wires every service over `repositories` and registers their metrics.
    pub fn new(deps: DependenciesInjectDeps, registry: &mut Registry) -> Self {
        let DependenciesInjectDeps {
            repositories,
            hash,
            jwt_config,
        } = deps;

        let auth_deps = AuthServiceDeps {
            users: repositories.user.clone(),
            hash,
            jwt: jwt_config,
        };
        let auth_service = Arc::new(AuthService::new(auth_deps, registry)) as DynAuthService;

        let table_service = TableService::new(
            TableServiceDeps {
                repo: repositories.table.clone(),
            },
            registry,
        );

        let product_service = ProductService::new(
            ProductServiceDeps {
                repo: repositories.product.clone(),
            },
            registry,
        );

        let order_deps = OrderServiceDeps {
            repo: repositories.order.clone(),
            users: repositories.user.clone(),
            payments: repositories.payment.clone(),
        };
        let order_service = OrderService::new(order_deps, registry);

        let kitchen_deps = KitchenServiceDeps {
            query: repositories.order.query.clone(),
            orders: order_service.command.clone(),
        };
        let kitchen_service =
            Arc::new(KitchenService::new(kitchen_deps, registry)) as DynKitchenService;

        Self {
            auth_service,
            table_service,
            product_service,
            order_service,
            kitchen_service,
        }
    }
}

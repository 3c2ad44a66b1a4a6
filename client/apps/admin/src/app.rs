//! Wiring and command execution

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Context;
use auth::domain::entity::credentials::{LoginForm, RegisterForm};
use auth::presentation::toast::{settled_toast, succeeded};
use auth::presentation::{AdminHeader, AuthForms, ServerLogout};
use auth::{AuthConfig, AuthService, AuthState, HttpAuthGateway, StorageSessionRecord};
use kernel::error::app_error::AppError;
use orders::presentation::{OrderDetailsView, OrderStatusForm, status_options};
use orders::{HttpOrderGateway, Order, OrderDesk, OrderId, OrderStatus, OrdersConfig};
use platform::config::ApiConfig;
use platform::http::HttpClient;
use platform::storage::FileStore;
use platform::ui::{Notifier, RecordingNavigator, Toast};

use crate::cli::{Cli, Command, OrdersSubcommand};
use crate::console::ConsoleNotifier;

const SESSION_DIR_NAME: &str = "store-admin";

type Record = StorageSessionRecord<FileStore>;
type Auth = AuthService<HttpAuthGateway, Record>;

/// Everything a command needs
pub struct App {
    auth: Arc<Auth>,
    desk: Arc<OrderDesk<HttpOrderGateway>>,
    notifier: Arc<dyn Notifier>,
    navigator: Arc<RecordingNavigator>,
}

/// `--session-dir`, or `<cache dir>/store-admin`
pub fn session_dir(flag: Option<PathBuf>) -> PathBuf {
    flag.unwrap_or_else(|| {
        dirs::cache_dir()
            .unwrap_or_else(std::env::temp_dir)
            .join(SESSION_DIR_NAME)
    })
}

impl App {
    pub fn build(api: ApiConfig, session_dir: PathBuf) -> anyhow::Result<Self> {
        let client = HttpClient::new(api).context("Failed to set up the HTTP client")?;
        let store = FileStore::open(&session_dir).with_context(|| {
            format!("Failed to open session directory {}", session_dir.display())
        })?;
        tracing::debug!(path = %store.path().display(), "Session store opened");

        let auth_config = Arc::new(AuthConfig::default());
        let gateway = Arc::new(HttpAuthGateway::new(client.clone(), auth_config.clone()));
        let record = Arc::new(StorageSessionRecord::new(store, auth_config.clone()));
        let auth = Arc::new(AuthService::new(gateway, record, auth_config));

        let order_gateway = HttpOrderGateway::new(client, Arc::new(OrdersConfig::default()))
            .with_auth(auth.store().clone());
        let desk = Arc::new(OrderDesk::new(Arc::new(order_gateway)));

        Ok(Self {
            auth,
            desk,
            notifier: Arc::new(ConsoleNotifier),
            navigator: Arc::new(RecordingNavigator::new()),
        })
    }

    pub async fn run(&self, command: Command) -> anyhow::Result<ExitCode> {
        match command {
            Command::Register {
                user_name,
                email,
                password,
            } => {
                let form = RegisterForm::new(&user_name, &email, password).map_err(user_error)?;
                let forms = self.forms();
                Ok(exit_code(succeeded(&forms.submit_register(&form).await)))
            }
            Command::Login { email, password } => {
                let form = LoginForm::new(&email, password).map_err(user_error)?;
                let phase = self.forms().submit_login(&form).await;
                if succeeded(&phase) {
                    print_state(&self.auth.state());
                }
                Ok(exit_code(succeeded(&phase)))
            }
            Command::Whoami => {
                self.auth.bootstrap().await;
                let state = self.auth.state();
                print_state(&state);
                Ok(exit_code(state.is_authenticated))
            }
            Command::Logout => {
                self.auth.bootstrap().await;
                let binding = ServerLogout::new(
                    self.auth.clone(),
                    self.notifier.clone(),
                    self.navigator.clone(),
                );
                Ok(exit_code(succeeded(&binding.handle_logout().await)))
            }
            Command::SignOut => {
                let header = AdminHeader::new(self.auth.clone(), self.navigator.clone(), |_| {});
                header.handle_logout();
                self.notifier.notify(Toast::info("Signed out"));
                Ok(ExitCode::SUCCESS)
            }
            Command::Orders(orders) => self.run_orders(orders.command).await,
        }
    }

    async fn run_orders(&self, command: OrdersSubcommand) -> anyhow::Result<ExitCode> {
        if let OrdersSubcommand::Statuses = command {
            for option in status_options() {
                println!("{:<12} {}", option.id, option.label);
            }
            return Ok(ExitCode::SUCCESS);
        }

        self.auth.bootstrap().await;
        if !self.auth.state().is_authenticated {
            self.notifier
                .notify(Toast::destructive("Not signed in. Run `admin login` first."));
            return Ok(ExitCode::FAILURE);
        }

        match command {
            OrdersSubcommand::List => {
                let phase = self.desk.list_orders().await;
                if let Some(rejection) = phase.rejection() {
                    self.notifier
                        .notify(Toast::destructive(rejection.user_message()));
                    return Ok(ExitCode::FAILURE);
                }
                for order in &self.desk.state().order_list {
                    print_order_line(order);
                }
                Ok(ExitCode::SUCCESS)
            }
            OrdersSubcommand::Show { id } => {
                let id = OrderId::new(id).map_err(user_error)?;
                self.show_order(&id).await
            }
            OrdersSubcommand::SetStatus { id, status } => {
                let id = OrderId::new(id).map_err(user_error)?;
                let status = OrderStatus::selectable(&status).map_err(user_error)?;

                let form = OrderStatusForm::new(self.desk.clone(), self.notifier.clone(), id.clone());
                let phase = form.submit(&status).await;
                if !succeeded(&phase) {
                    if let Some(toast) = settled_toast(&phase) {
                        self.notifier.notify(toast);
                    }
                    return Ok(ExitCode::FAILURE);
                }
                if let Some(order) = self.desk.state().order_details {
                    print_details(&OrderDetailsView::new(&order, &self.auth.state()));
                }
                Ok(ExitCode::SUCCESS)
            }
            OrdersSubcommand::Statuses => Ok(ExitCode::SUCCESS),
        }
    }

    async fn show_order(&self, id: &OrderId) -> anyhow::Result<ExitCode> {
        let phase = self.desk.order_details(id).await;
        if let Some(rejection) = phase.rejection() {
            self.notifier
                .notify(Toast::destructive(rejection.user_message()));
            return Ok(ExitCode::FAILURE);
        }

        let state = self.desk.state();
        let Some(order) = state.order_details.as_ref() else {
            self.notifier
                .notify(Toast::destructive(format!("Order {id} not found")));
            return Ok(ExitCode::FAILURE);
        };
        print_details(&OrderDetailsView::new(order, &self.auth.state()));
        self.desk.reset_order_details();
        Ok(ExitCode::SUCCESS)
    }

    fn forms(&self) -> AuthForms<HttpAuthGateway, Record> {
        AuthForms::new(
            self.auth.clone(),
            self.notifier.clone(),
            self.navigator.clone(),
        )
    }

    /// Route the UI would show now
    pub fn route(&self) -> Option<String> {
        self.navigator.current()
    }
}

fn user_error(err: AppError) -> anyhow::Error {
    anyhow::anyhow!("{}", err.message())
}

fn exit_code(ok: bool) -> ExitCode {
    if ok {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

fn print_state(state: &AuthState) {
    match state.user.as_ref() {
        Some(user) => println!(
            "Signed in as {} ({}){}",
            user.user_name,
            user.role,
            user.email
                .as_deref()
                .map(|email| format!(" <{email}>"))
                .unwrap_or_default()
        ),
        None if state.is_authenticated => println!("Signed in"),
        None => println!("Not signed in"),
    }
}

fn print_order_line(order: &Order) {
    println!(
        "{:<26} {:<10} {:<12} ${}",
        order.id,
        order.order_day(),
        order.order_status,
        order.total_amount
    );
}

fn print_details(view: &OrderDetailsView) {
    for row in &view.rows {
        println!("{:<15} {}", row.label, row.value);
    }
    println!("{:<15} {} ({:?})", "Order Status", view.status.text, view.status.tone);

    println!();
    println!("Order Details");
    for item in &view.items {
        println!(
            "  Title: {}  Quantity: {}  Price: {}",
            item.title, item.quantity, item.price
        );
    }

    println!();
    println!("Shipping Info");
    for line in view.shipping.iter().filter(|line| !line.is_empty()) {
        println!("  {line}");
    }
}

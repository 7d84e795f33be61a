//! Deterministic mock data for the admin screens.
//!
//! Ids start at 1; records get older as the id shrinks, one day apart.

use chrono::{DateTime, Duration, Utc};

use crate::domain::{order_number, placeholder_image, Order, OrderItem, OrderItemCreate, Product, User, ORDER_STATUSES};

pub const MOCK_USERS: usize = 30;
pub const MOCK_PRODUCTS: usize = 30;
pub const MOCK_ORDERS: usize = 300;

const REAL_NAMES: [&str; MOCK_USERS] = [
    "张伟", "王芳", "李娜", "刘洋", "陈静", "杨军", "赵敏", "孙涛", "周杰", "吴彦祖",
    "郑爽", "黄晓明", "林志玲", "范冰冰", "李冰冰", "章子怡", "周润发", "刘德华", "张国荣", "梁朝伟",
    "赵本山", "小沈阳", "宋丹丹", "蔡明", "潘长江", "郭德纲", "于谦", "岳云鹏", "孙越", "张云雷",
];

const PRODUCT_NAMES: [&str; MOCK_PRODUCTS] = [
    "无线蓝牙耳机", "智能手环", "机械键盘", "高清摄像头", "笔记本电脑",
    "显示器", "鼠标垫", "USB充电器", "移动硬盘", "路由器",
    "智能音箱", "平板电脑", "游戏手柄", "麦克风", "电脑椅",
    "台灯", "手机支架", "数据线", "蓝牙音箱", "投影仪",
    "扫描仪", "打印机", "绘图板", "读卡器", "散热器",
    "电源适配器", "网线", "HDMI线", "耳机架", "桌面支架",
];

const CATEGORIES: [&str; 5] = ["电子产品", "数码配件", "办公用品", "智能设备", "电脑配件"];
const CUSTOMERS: [&str; 8] = ["张三", "李四", "王五", "赵六", "孙七", "周八", "吴九", "郑十"];
const PAYMENT_METHODS: [&str; 4] = ["支付宝", "微信支付", "银行卡", "货到付款"];

fn timestamps(now: DateTime<Utc>, i: usize) -> (DateTime<Utc>, DateTime<Utc>) {
    let age = i as i64;
    (now - Duration::days(age), now - Duration::hours(age))
}

pub fn mock_users(now: DateTime<Utc>) -> Vec<User> {
    let roles = ["admin", "editor", "viewer"];
    let statuses = ["active", "inactive"];

    REAL_NAMES
        .iter()
        .enumerate()
        .map(|(i, real_name)| {
            let n = i + 1;
            let (created_at, updated_at) = timestamps(now, i);
            User {
                id: n as i64,
                username: format!("user{n}"),
                email: format!("user{n}@example.com"),
                real_name: real_name.to_string(),
                phone: format!("138{n:08}"),
                role: roles[i % roles.len()].to_string(),
                status: statuses[i % statuses.len()].to_string(),
                avatar: "/static/images/zxg.jpg".to_string(),
                created_at,
                updated_at,
            }
        })
        .collect()
}

pub fn mock_products(now: DateTime<Utc>) -> Vec<Product> {
    let statuses = ["active", "inactive", "out_of_stock"];

    PRODUCT_NAMES
        .iter()
        .enumerate()
        .map(|(i, name)| {
            let n = i + 1;
            let (created_at, updated_at) = timestamps(now, i);
            Product {
                id: n as i64,
                name: name.to_string(),
                sku: format!("SKU{n:05}"),
                category: CATEGORIES[i % CATEGORIES.len()].to_string(),
                price: (n * 50) as f64 + 99.99,
                stock: (n * 10 - (i % 3) * 5) as i64,
                status: statuses[i % statuses.len()].to_string(),
                image: placeholder_image(name),
                description: format!("这是一款优质的{name}，性能卓越，品质保证。"),
                created_at,
                updated_at,
            }
        })
        .collect()
}

pub fn mock_orders(now: DateTime<Utc>) -> Vec<Order> {
    (0..MOCK_ORDERS)
        .map(|i| {
            let n = i + 1;
            let items: Vec<OrderItem> = (0..i % 3 + 1)
                .map(|j| {
                    OrderItem::new(
                        (j + 1) as i64,
                        OrderItemCreate {
                            product_name: format!("商品-{}", j + 1),
                            sku: format!("SKU{:05}", (i * 7 + j * 13) % 1000),
                            quantity: ((i + j) % 3 + 1) as u32,
                            price: ((i * 37 + j * 11) % 500 + 50) as f64 + 0.99,
                        },
                    )
                })
                .collect();
            let (created_at, updated_at) = timestamps(now, i);
            Order {
                id: n as i64,
                order_no: order_number(n as i64, now),
                customer_name: CUSTOMERS[i % CUSTOMERS.len()].to_string(),
                customer_email: format!("customer{n}@example.com"),
                total_amount: items.iter().map(|item| item.subtotal).sum(),
                status: ORDER_STATUSES[i % ORDER_STATUSES.len()].to_string(),
                payment_method: PAYMENT_METHODS[i % PAYMENT_METHODS.len()].to_string(),
                items,
                created_at,
                updated_at,
            }
        })
        .collect()
}

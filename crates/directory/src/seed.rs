//! Static demo data set loaded at startup.
//!
//! Several records deliberately reference organizations that do not exist
//! (e.g. partner `KDN合伙人` points at provider `KDN测试服务商`, while the
//! provider is registered as `KDN服务商`). Those records are orphaned by the
//! name-based join and are only visible to the platform operator.

#![allow(clippy::too_many_arguments)]

use relaydesk_core::{EntityId, OrgKind};

use crate::audit::{AuditStatus, PartnerAudit, PropertyAudit, StationAudit};
use crate::directory::Directory;
use crate::finance::{BillStatus, RevenueBill, SplitConfig, SplitTarget};
use crate::organization::{ActivationStatus, Partner, PropertyCompany, ServiceProvider};
use crate::parcel::Parcel;
use crate::report::{ReportData, ReportSubject};
use crate::station::Station;
use crate::system_user::SystemUser;
use crate::ticket::{Ticket, TicketKind, TicketStatus};

/// Registered name of the demo property company. The trailing U+200C is part
/// of the stored name and must be matched exactly.
pub const PENGBAI_PROPERTY: &str = "深圳市澎柏物业管理有限公司\u{200c}";

/// Build the demo directory.
pub fn demo_directory() -> Directory {
    Directory {
        providers: providers().into(),
        partners: partners().into(),
        properties: properties().into(),
        stations: stations().into(),
        bills: bills().into(),
        parcels: parcels().into(),
        archived_parcels: archived_parcels().into(),
        reports: reports().into(),
        users: users().into(),
        station_audits: station_audits().into(),
        partner_audits: partner_audits().into(),
        property_audits: property_audits().into(),
        tickets: tickets().into(),
        split_configs: split_configs().into(),
    }
}

fn provider(
    id: &str,
    name: &str,
    address: &str,
    contact: &str,
    phone: &str,
    partner_count: u32,
    margin: Option<f64>,
    region: &str,
    create_time: &str,
    status: ActivationStatus,
) -> ServiceProvider {
    ServiceProvider {
        id: EntityId::new(id),
        name: name.to_string(),
        address: address.to_string(),
        contact: contact.to_string(),
        phone: phone.to_string(),
        partner_count,
        account_name: contact.to_string(),
        account_id: phone.to_string(),
        credit_code: String::new(),
        margin,
        region: region.to_string(),
        create_time: create_time.to_string(),
        status,
    }
}

fn providers() -> Vec<ServiceProvider> {
    use ActivationStatus::*;
    vec![
        provider("sp001", "深圳市快金数据", "华强科技广场", "寇鑫", "18618162830", 1, None, "广东省深圳市", "2025-11-10 09:58:34", Active),
        provider("sp002", "翟总", "深圳南山区", "翟总", "13428796300", 1, None, "广东省深圳市南山区", "2025-11-02 12:47:27", Active),
        ServiceProvider {
            account_name: "KDN测试服务商钱包".to_string(),
            account_id: "99067386025".to_string(),
            ..provider("sp003", "KDN服务商", "广东省深圳市福田区梅林街道华强科创广场1F", "研发测试", "15010102301", 1, Some(10000.0), "广东省深圳市福田区", "2025-10-31 16:49:15", Active)
        },
        provider("sp004", "快递鸟", "广东省深圳市福田区梅丰社区北环大道6018号华强科创广场1栋", "", "", 0, None, "-", "2025-07-25 18:46:44", Disabled),
        provider("sp005", "快递鸟服务商", "深圳福田区华强科创广场1栋17F", "", "", 0, None, "-", "2025-07-25 16:46:53", Disabled),
    ]
}

fn partner(
    id: &str,
    name: &str,
    provider_name: &str,
    provider_id: &str,
    contact_person: &str,
    phone: &str,
    staff_count: u32,
    station_count: u32,
    create_time: &str,
    address: &str,
    service_scope: &str,
    address_detail: &str,
) -> Partner {
    Partner {
        id: EntityId::new(id),
        name: name.to_string(),
        provider_name: Some(provider_name.to_string()),
        provider_id: Some(EntityId::new(provider_id)),
        contact_person: contact_person.to_string(),
        phone: phone.to_string(),
        staff_count,
        station_count,
        margin: Some(0.0),
        account_name: contact_person.to_string(),
        account_id: phone.to_string(),
        credit_code: Some(String::new()),
        status: ActivationStatus::Active,
        create_time: create_time.to_string(),
        address: address.to_string(),
        service_scope: Some(service_scope.to_string()),
        address_detail: Some(address_detail.to_string()),
    }
}

fn partners() -> Vec<Partner> {
    vec![
        partner("p001", "快递鸟", "深圳市快金数据", "sp001", "寇鑫", "18618162830", 10, 1, "2025-11-10 09:59:52", "华强科创大厦", "九堡街道", "科技园1号楼101"),
        partner("p002", "翟总", "翟总", "sp002", "翟总", "13428796300", 6, 4, "2025-11-02 12:48:45", "广东深圳南山", "长河街道", "创智中心202室"),
        Partner {
            account_name: "KDN测试合伙人钱包".to_string(),
            account_id: "11067386025".to_string(),
            ..partner("p003", "KDN合伙人", "KDN测试服务商", "sp003", "KDN测试001", "15014042029", 16, 7, "2025-10-31 16:51:11", "广东省深圳市福田区梅林街道梅林一村", "全区", "物流园区A座")
        },
    ]
}

fn property(
    id: &str,
    name: &str,
    address: &str,
    station_count: u32,
    contact: &str,
    account: &str,
    phone: &str,
    create_time: &str,
    provider_name: &str,
) -> PropertyCompany {
    PropertyCompany {
        id: EntityId::new(id),
        name: name.to_string(),
        address: address.to_string(),
        station_count,
        contact: contact.to_string(),
        account: account.to_string(),
        phone: phone.to_string(),
        create_time: create_time.to_string(),
        status: ActivationStatus::Active,
        provider_name: Some(provider_name.to_string()),
    }
}

fn properties() -> Vec<PropertyCompany> {
    vec![
        property("prop001", PENGBAI_PROPERTY, "深圳市南山区粤海街道滨海社区书山路23号创世纪滨海花园二期裙楼会所三层", 4, "翟总", "19007560872", "19007560872", "2025-11-02 12:21:19", "翟总"),
        property("prop002", "碧桂园物业公司", "北京海淀区", 4, "王鑫", "18104445320", "18104445320", "2025-09-03 10:42:48", "深圳市快金数据"),
        property("prop003", "快递鸟公司", "深圳市福田区华强科创广场17楼", 5, "李总", "15815746335", "15815746335", "2025-08-28 11:23:15", "KDN服务商"),
        property("prop004", "【碧喜公司-测试】", "北京市朝阳区", 1, "陈经理", "15915915915", "15915915915", "2025-08-28 11:16:39", "深圳市快金数据"),
        property("prop005", "京基物业公司", "深圳市福田区沙头街道下沙社区滨河路9289号", 2, "刘杰", "liujie", "13673678037", "2025-07-25 18:45:41", "翟总"),
        property("prop006", "都之都物业公司", "深圳市宝安区新安街道罗田路 68", 2, "研发测试", "15014043685", "15014043685", "2025-07-25 16:46:37", "KDN服务商"),
    ]
}

fn station(
    id: &str,
    name: &str,
    partner_name: &str,
    property_name: &str,
    account: &str,
    (inbound, outbound, stock): (u32, u32, u32),
    balance: f64,
    (courier_count, staff_count): (u32, u32),
    create_time: &str,
) -> Station {
    Station {
        id: EntityId::new(id),
        name: name.to_string(),
        partner_name: partner_name.to_string(),
        property_name: Some(property_name.to_string()),
        account: account.to_string(),
        contact: account.to_string(),
        status: "normal".to_string(),
        account_status: "active".to_string(),
        inbound,
        outbound,
        stock,
        balance,
        region: "广东省深圳市".to_string(),
        margin: 0.0,
        courier_count,
        staff_count,
        is_dispatching: true,
        is_receiving: false,
        create_time: create_time.to_string(),
    }
}

fn stations() -> Vec<Station> {
    vec![
        station("s001", "厚德品园上门服务", "翟总", PENGBAI_PROPERTY, "18618162830", (133, 133, 0), 3000.0, (1, 1), "2025-11-20 13:16:19"),
        station("s002", "锦隆花园上门服务", "翟总", PENGBAI_PROPERTY, "13510221470", (0, 0, 0), 1000.0, (6, 1), "2025-11-14 17:05:27"),
        station("s003", "嘉铭D区上门（未收联系15369803719）", "KDN合伙人", "快递鸟公司", "15369803719", (299, 188, 112), 20000.0, (4, 1), "2025-11-06 10:10:13"),
        station("s004", "宏观苑上门服务（找件专线：17620366468）", "翟总", PENGBAI_PROPERTY, "18588462126", (45, 45, 0), 2000.0, (1, 1), "2025-11-05 16:37:17"),
        station("s005", "创世纪滨海花园上门服务", "翟总", PENGBAI_PROPERTY, "19007560871", (311, 312, 1), 5000.0, (6, 3), "2025-11-02 19:21:00"),
        station("s006", "嘉铭E区上门服务（未收请联系13253156983）", "KDN合伙人", "快递鸟公司", "13253156983", (245, 146, 99), 20000.0, (5, 2), "2025-10-31 17:36:08"),
    ]
}

fn bill(
    id: &str,
    month: &str,
    account_type: &str,
    name: &str,
    user_id: &str,
    user_phone: &str,
    station_name: &str,
    amount: f64,
    status: BillStatus,
) -> RevenueBill {
    RevenueBill {
        id: EntityId::new(id),
        month: month.to_string(),
        account_type: account_type.to_string(),
        name: name.to_string(),
        user_id: user_id.to_string(),
        user_phone: user_phone.to_string(),
        station_name: station_name.to_string(),
        amount,
        status,
    }
}

fn bills() -> Vec<RevenueBill> {
    vec![
        bill("BILL202309001", "2023-09", "station", "幸福小区服务站", "u_s001", "138****1111", "幸福小区服务站", 3450.00, BillStatus::Confirmed),
        bill("BILL202309002", "2023-09", "courier", "李四", "u_c002", "139****2222", "创智中心服务站", 1200.50, BillStatus::Paid),
        bill("BILL202511003", "2025-11", "station", "厚德品园上门服务", "u_s101", "186****2830", "厚德品园上门服务", 106.40, BillStatus::Pending),
        bill("BILL202511004", "2025-11", "station", "嘉铭D区上门（未收联系15369803719）", "u_s103", "153****3719", "嘉铭D区上门（未收联系15369803719）", 239.20, BillStatus::Confirmed),
    ]
}

fn parcel(
    id: &str,
    pickup_code: &str,
    brand: &str,
    inbound_time: &str,
    outbound_time: Option<&str>,
    receiver_phone: &str,
    station_name: &str,
    station_account: &str,
    status: &str,
    notify_status: &str,
    partner_name: &str,
    property_name: &str,
) -> Parcel {
    Parcel {
        id: EntityId::new(id),
        pickup_code: pickup_code.to_string(),
        brand: brand.to_string(),
        inbound_time: inbound_time.to_string(),
        outbound_time: outbound_time.map(str::to_string),
        receiver_phone: receiver_phone.to_string(),
        station_name: station_name.to_string(),
        station_account: station_account.to_string(),
        status: status.to_string(),
        notify_status: notify_status.to_string(),
        partner_name: Some(partner_name.to_string()),
        property_name: Some(property_name.to_string()),
    }
}

fn parcels() -> Vec<Parcel> {
    vec![
        parcel("SF1234567890", "A-1-1024", "顺丰速运", "2023-10-26 09:30", None, "13900000001", "幸福小区服务站", "YZ001", "pending", "sent", "城东区域合伙人", "绿城物业公司"),
        parcel("YT9876543210", "B-2-0512", "圆通速递", "2023-10-26 10:15", Some("2023-10-26 18:00"), "13900000002", "幸福小区服务站", "YZ001", "signed", "sent", "城东区域合伙人", "绿城物业公司"),
        parcel("YD1122334455", "C-3-2048", "韵达快递", "2023-10-25 16:20", Some("2023-10-26 09:10"), "13900000003", "阳光花园服务站", "YZ002", "outbound", "failed", "城东区域合伙人", "万科物业公司"),
        parcel("ZT5566778899", "D-1-0007", "中通快递", "2025-11-21 08:40", None, "13900000004", "厚德品园上门服务", "18618162830", "pending", "sent", "翟总", PENGBAI_PROPERTY),
    ]
}

fn archived_parcels() -> Vec<Parcel> {
    vec![
        parcel("SF0000000001", "H-1-0001", "顺丰速运", "2023-01-01 09:00", Some("2023-01-01 18:30"), "13911111111", "幸福小区服务站", "YZ001", "signed", "sent", "城东区域合伙人", "绿城物业公司"),
        parcel("JD0000000002", "H-2-0002", "京东快递", "2025-10-30 10:20", Some("2025-10-30 19:05"), "13911111112", "厚德品园上门服务", "18618162830", "signed", "sent", "翟总", PENGBAI_PROPERTY),
    ]
}

fn report(
    id: &str,
    name: &str,
    subject: ReportSubject,
    (province, city, district, community): (&str, &str, &str, &str),
    contact: &str,
    (total_inbound, total_outbound, issue_count): (u32, u32, u32),
    income: f64,
) -> ReportData {
    ReportData {
        id: EntityId::new(id),
        name: name.to_string(),
        subject,
        province: province.to_string(),
        city: city.to_string(),
        district: district.to_string(),
        community: community.to_string(),
        contact: contact.to_string(),
        total_inbound,
        total_outbound,
        issue_count,
        income,
        date: "2023-10-26".to_string(),
    }
}

fn reports() -> Vec<ReportData> {
    use ReportSubject::*;
    vec![
        report("rep001", "幸福小区服务站", Station, ("浙江省", "杭州市", "西湖区", "幸福家园"), "张三", (120, 80, 2), 96.00),
        report("rep002", "阳光花园服务站", Station, ("广东省", "深圳市", "福田区", "阳光花园"), "李四", (0, 0, 0), 0.00),
        report("rep003", "杭州顺达服务商", Provider, ("浙江省", "杭州市", "-", "-"), "王五", (1520, 1400, 15), 1216.00),
        report("rep004", "城东区域合伙人", Partner, ("浙江省", "杭州市", "上城区", "-"), "赵六", (620, 580, 5), 496.00),
        report("rep005", "绿城物业公司", Property, ("浙江省", "杭州市", "西湖区", "-"), "钱七", (420, 360, 1), 0.00),
        report("rep006", "顺丰速运", Brand, ("-", "-", "-", "-"), "-", (500, 480, 10), 500.00),
        report("rep007", "厚德品园上门服务", Station, ("广东省", "深圳市", "南山区", "厚德品园"), "翟总", (133, 133, 0), 106.40),
    ]
}

fn users() -> Vec<SystemUser> {
    vec![
        SystemUser {
            id: EntityId::new("u001"),
            username: "admin".to_string(),
            phone: "13800000000".to_string(),
            role_name: "超级管理员".to_string(),
            status: "active".to_string(),
            create_time: "2023-01-01".to_string(),
            organization: Some("平台总部".to_string()),
            wallet_id: Some("13800000000".to_string()),
            wallet_name: Some("admin的钱包".to_string()),
            wallet_balance: Some(10000.00),
            password: Some("123456a".to_string()),
        },
        SystemUser {
            id: EntityId::new("u002"),
            username: "provider_01".to_string(),
            phone: "13900000001".to_string(),
            role_name: "服务商".to_string(),
            status: "active".to_string(),
            create_time: "2023-02-01".to_string(),
            organization: Some("杭州顺达服务商".to_string()),
            wallet_id: Some("13900000001".to_string()),
            wallet_name: Some("顺达钱包".to_string()),
            wallet_balance: Some(500000.00),
            password: Some("123456a".to_string()),
        },
    ]
}

fn station_audits() -> Vec<StationAudit> {
    vec![
        StationAudit {
            id: EntityId::new("a001"),
            station_name: "未来科技城服务站".to_string(),
            account: "YZ_APPLY_001".to_string(),
            phone: "15011112222".to_string(),
            business_hours: Some("09:00-21:00".to_string()),
            region: "杭州市余杭区".to_string(),
            community: Some("未来科技城小区".to_string()),
            address: "仓前街道xxx路".to_string(),
            partner_name: "城东区域合伙人".to_string(),
            provider_name: "杭州顺达服务商".to_string(),
            property_name: Some("绿城物业公司".to_string()),
            delivery_payer: Some("服务站".to_string()),
            sms_payer: Some("服务站".to_string()),
            status: AuditStatus::Pending,
            apply_time: "2023-10-25 10:00".to_string(),
        },
        StationAudit {
            id: EntityId::new("a002"),
            station_name: "西溪湿地服务站".to_string(),
            account: "YZ_APPLY_002".to_string(),
            phone: "15033334444".to_string(),
            business_hours: Some("08:30-20:30".to_string()),
            region: "杭州市西湖区".to_string(),
            community: Some("西溪花园".to_string()),
            address: "文二西路xxx号".to_string(),
            partner_name: "滨江联合合伙人".to_string(),
            provider_name: "上海快运通服务商".to_string(),
            property_name: Some("万科物业公司".to_string()),
            delivery_payer: Some("快递员".to_string()),
            sms_payer: Some("服务站".to_string()),
            status: AuditStatus::Approved,
            apply_time: "2023-10-24 14:30".to_string(),
        },
    ]
}

fn partner_audits() -> Vec<PartnerAudit> {
    vec![
        PartnerAudit {
            id: EntityId::new("pa001"),
            partner_name: "城西物流合伙人".to_string(),
            contact_person: "周八".to_string(),
            phone: "13700001111".to_string(),
            provider_name: Some("深圳市快金数据".to_string()),
            status: AuditStatus::Pending,
            apply_time: "2023-10-26 09:00".to_string(),
        },
        PartnerAudit {
            id: EntityId::new("pa002"),
            partner_name: "萧山南部合伙人".to_string(),
            contact_person: "吴九".to_string(),
            phone: "13566667777".to_string(),
            provider_name: None,
            status: AuditStatus::Approved,
            apply_time: "2023-10-20 14:00".to_string(),
        },
    ]
}

fn property_audits() -> Vec<PropertyAudit> {
    vec![
        PropertyAudit {
            id: EntityId::new("pra001"),
            name: "保利物业公司".to_string(),
            contact: "张经理".to_string(),
            phone: "0571-77777777".to_string(),
            region: "浙江省-杭州市".to_string(),
            provider_name: "杭州顺达服务商".to_string(),
            status: AuditStatus::Pending,
            apply_time: "2023-10-27 10:00".to_string(),
        },
        PropertyAudit {
            id: EntityId::new("pra002"),
            name: "龙湖物业公司".to_string(),
            contact: "刘经理".to_string(),
            phone: "0571-66666666".to_string(),
            region: "浙江省-杭州市".to_string(),
            provider_name: "杭州顺达服务商".to_string(),
            status: AuditStatus::Approved,
            apply_time: "2023-10-25 09:00".to_string(),
        },
    ]
}

fn ticket(
    id: &str,
    kind: TicketKind,
    (initiator, initiator_kind): (&str, OrgKind),
    station_name: &str,
    description: &str,
    create_time: &str,
    status: TicketStatus,
    handler: &str,
) -> Ticket {
    Ticket {
        id: EntityId::new(id),
        kind,
        initiator: initiator.to_string(),
        initiator_kind: Some(initiator_kind),
        station_name: station_name.to_string(),
        description: description.to_string(),
        create_time: create_time.to_string(),
        status,
        handler: Some(handler.to_string()),
    }
}

fn tickets() -> Vec<Ticket> {
    use TicketKind::*;
    use TicketStatus::*;
    vec![
        ticket("GD20231026001", Complaint, ("幸福小区服务站", OrgKind::Station), "幸福小区服务站", "客户投诉包裹破损，要求赔偿", "2023-10-26 11:00", Pending, "运营专员A"),
        ticket("GD20231025002", Business, ("城东区域合伙人", OrgKind::Partner), "-", "咨询下个月的活动政策", "2023-10-25 14:00", Resolved, "运营主管"),
        ticket("GD20251121003", Complaint, ("厚德品园上门服务", OrgKind::Station), "厚德品园上门服务", "上门派送超时，客户要求改约", "2025-11-21 09:15", Pending, "-"),
    ]
}

fn split(
    id: &str,
    entity_id: &str,
    entity_name: &str,
    entity_type: SplitTarget,
    wallet_account: &str,
    ratio: f64,
    provider_ratio: Option<f64>,
    update_time: &str,
) -> SplitConfig {
    SplitConfig {
        id: EntityId::new(id),
        entity_id: entity_id.to_string(),
        entity_name: entity_name.to_string(),
        entity_type,
        wallet_account: wallet_account.to_string(),
        ratio,
        provider_ratio,
        status: ActivationStatus::Active,
        update_time: update_time.to_string(),
        station_name: None,
        partner_name: None,
        provider_name: None,
        property_name: None,
    }
}

fn split_configs() -> Vec<SplitConfig> {
    let staff = |id: &str, entity_id: &str, name: &str, wallet: &str, ratio: f64, update_time: &str| SplitConfig {
        station_name: Some("幸福小区服务站".to_string()),
        partner_name: Some("城东区域合伙人".to_string()),
        provider_name: Some("杭州顺达服务商".to_string()),
        property_name: Some("绿城物业公司".to_string()),
        ..split(id, entity_id, name, SplitTarget::Staff, wallet, ratio, None, update_time)
    };
    vec![
        split("sc000", "kj001", "快金数据有限公司", SplitTarget::Platform, "PLATFORM_WALLET_001", 5.0, None, "2023-01-01"),
        split("sc001", "sp001", "杭州顺达服务商", SplitTarget::Provider, "SP_WALLET_001", 5.0, None, "2023-10-01"),
        split("sc002", "sp002", "上海快运通服务商", SplitTarget::Provider, "SP_WALLET_002", 5.0, None, "2023-10-02"),
        split("sc003", "p001", "城东区域合伙人", SplitTarget::Partner, "PT_WALLET_001", 3.5, None, "2023-10-03"),
        split("sc004", "p002", "滨江联合合伙人", SplitTarget::Partner, "PT_WALLET_002", 3.5, None, "2023-10-04"),
        split("sc005", "prop001", "绿城物业公司", SplitTarget::Property, "PROP_WALLET_001", 10.0, Some(15.0), "2023-10-05"),
        split("sc006", "prop002", "万科物业公司", SplitTarget::Property, "PROP_WALLET_002", 15.0, Some(5.0), "2023-10-06"),
        staff("sc007", "st_01", "操作员小王", "13988887777", 0.5, "2023-11-20"),
        staff("sc008", "st_02", "派送员小李", "15066665555", 0.8, "2023-11-21"),
    ]
}
